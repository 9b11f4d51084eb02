use std::rc::Rc;

use log::warn;
use yew::{
    classes, function_component, hook, html, use_callback, use_context, AttrValue, Classes,
    Component, Context, ContextProvider, Html, Properties,
};

use crate::inputs::button::Button;
use crate::link::SharedLink;
use crate::overlay_window::OverlayWindow;

/// Defines a modal dialog with a single "Ok" button.
#[derive(Default, Debug)]
struct Modal {
    /// Title to display for the modal.
    title: AttrValue,
    /// Content to display in the modal.
    content: Html,
    /// Extra classes to add to the modal.
    class: Classes,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    /// Children which should have access to the ModalDispatcher.
    pub children: Html,
}

pub enum Msg {
    /// Display a modal.
    CreateModal {
        #[allow(private_interfaces)] // Use ModalDispatcher instead.
        modal: Rc<Modal>,
    },
    /// Remove a modal.
    DeleteModal {
        #[allow(private_interfaces)] // Use ModalDispatcher instead.
        modal: Rc<Modal>,
    },
}

/// Manages modal dialogs.
pub struct ModalManager {
    /// Currently displayed modals in insertion order.
    modals: Vec<Rc<Modal>>,

    /// Scope used to send messages to Self.
    link: SharedLink<Self>,
}

impl ModalManager {
    /// Message handler for CreateModal.
    fn create_modal(&mut self, modal: Rc<Modal>) -> bool {
        if self.modals.iter().any(|m| Rc::ptr_eq(m, &modal)) {
            warn!("Already contained this modal: {modal:?}");
            false
        } else {
            self.modals.push(modal);
            true
        }
    }

    /// Message handler for DeleteModal.
    fn delete_modal(&mut self, modal: Rc<Modal>) -> bool {
        match self.modals.iter().position(|m| Rc::ptr_eq(m, &modal)) {
            Some(idx) => {
                self.modals.remove(idx);
                true
            }
            // Expected if the modal was closed with "Ok" before its handle was dropped.
            None => false,
        }
    }

    /// Gets the [`ModalDispatcher`] for this [`ModalManager`].
    fn dispatcher(&self) -> ModalDispatcher {
        ModalDispatcher {
            link: self.link.clone(),
        }
    }
}

impl Component for ModalManager {
    type Properties = Props;
    type Message = Msg;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            modals: Vec::new(),
            link: SharedLink::new(ctx.link().clone()),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::CreateModal { modal } => self.create_modal(modal),
            Msg::DeleteModal { modal } => self.delete_modal(modal),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let modals = self.modals.iter().map(|modal| {
            let id = Rc::as_ptr(modal) as usize;
            html! {
                // Key by identity so later modals aren't recreated when earlier ones close.
                <ModalWindow key={id} modal={ModalRef(modal.clone())} />
            }
        });

        html! {
            <ContextProvider<ModalDispatcher> context={self.dispatcher()}>
                <>
                    {for modals}
                </>
                {ctx.props().children.clone()}
            </ContextProvider<ModalDispatcher>>
        }
    }
}

/// Reference to a displayed modal, compared by identity.
#[derive(Debug, Clone)]
struct ModalRef(Rc<Modal>);

impl PartialEq for ModalRef {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

#[derive(Properties, PartialEq)]
struct ModalWindowProps {
    /// The actual modal to display.
    modal: ModalRef,
}

/// Actual modal window.
#[function_component]
fn ModalWindow(ModalWindowProps { modal }: &ModalWindowProps) -> Html {
    let dispatcher = use_modal_dispatcher();
    let onclick = use_callback((modal.clone(), dispatcher), |(), (modal, dispatcher)| {
        dispatcher.close_modal(modal.0.clone());
    });

    let class = classes!("ModalWindow", modal.0.class.clone());
    html! {
        <OverlayWindow title={modal.0.title.clone()} {class}>
            {modal.0.content.clone()}
            <div class="modal-buttons">
                <Button class="modal-button" title="Ok" {onclick}>
                    {"Ok"}
                </Button>
            </div>
        </OverlayWindow>
    }
}

/// Dispatcher used to control modal dialogs.
#[derive(Debug, Clone, PartialEq)]
pub struct ModalDispatcher {
    /// Link used to send messages to the ModalManager.
    link: SharedLink<ModalManager>,
}

impl ModalDispatcher {
    /// Starts building a modal dialog.
    pub fn builder(&self) -> ModalBuilder {
        ModalBuilder {
            dispatcher: self,
            modal: Default::default(),
        }
    }

    /// Creates a new modal.
    fn create_modal(&self, modal: Modal) -> ModalHandle {
        let modal = Rc::new(modal);
        self.link.send_message(Msg::CreateModal {
            modal: modal.clone(),
        });
        ModalHandle {
            modal: Some(modal),
            dispatcher: self.clone(),
        }
    }

    /// Closes a modal.
    fn close_modal(&self, modal: Rc<Modal>) {
        self.link.send_message(Msg::DeleteModal { modal });
    }
}

/// Builder for modal dialogs.
pub struct ModalBuilder<'d> {
    dispatcher: &'d ModalDispatcher,
    modal: Modal,
}

impl<'d> ModalBuilder<'d> {
    /// Sets the title to display on the Modal.
    pub fn title<A: Into<AttrValue>>(mut self, title: A) -> Self {
        self.modal.title = title.into();
        self
    }

    /// Set the content of the modal.
    pub fn content(mut self, content: Html) -> Self {
        self.modal.content = content;
        self
    }

    /// Set the extra classes to display on the modal.
    pub fn class<C: Into<Classes>>(mut self, class: C) -> Self {
        self.modal.class = class.into();
        self
    }

    /// Builds the modal and displays it. Returns a handle which will keep the modal or clean it up
    /// when dropped.
    pub fn build(self) -> ModalHandle {
        self.dispatcher.create_modal(self.modal)
    }
}

/// Gets the dispatcher for creating modal dialogs.
#[hook]
pub fn use_modal_dispatcher() -> ModalDispatcher {
    use_context::<ModalDispatcher>()
        .expect("use_modal_dispatcher can only be used from a child of ModalManager")
}

/// Handle to a Modal dialog. The modal will be removed when this handle is dropped.
pub struct ModalHandle {
    /// The displayed modal, or `None` once persisted.
    modal: Option<Rc<Modal>>,

    /// Link to the modal manager, used to close the modal when dropped.
    dispatcher: ModalDispatcher,
}

impl ModalHandle {
    /// Consumes the modal handle and lets the modal stay until the user closes it.
    pub fn persist(mut self) {
        self.modal = None;
    }
}

impl Drop for ModalHandle {
    fn drop(&mut self) {
        if let Some(modal) = self.modal.take() {
            self.dispatcher.close_modal(modal);
        }
    }
}
