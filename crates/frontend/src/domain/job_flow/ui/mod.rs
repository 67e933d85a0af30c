mod flow_bar;

pub use flow_bar::JobFlowBar;
