pub use checkbox::LabeledCheckbox;

mod checkbox;
