mod fields;

pub use fields::{SliderField, TextAreaField, TextField};
