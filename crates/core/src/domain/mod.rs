pub mod observation;
pub mod recommendation;
