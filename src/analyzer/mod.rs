mod semantic_visitor;

pub use semantic_visitor::*;
