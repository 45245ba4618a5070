mod command_select;
mod field_inputs;
mod results_area;

pub use command_select::CommandSelect;
pub use field_inputs::FieldInputs;
pub use results_area::ResultsArea;
