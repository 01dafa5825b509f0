pub mod oneshot;
pub mod page;

pub use oneshot::{CalcStatus, run_calc};
pub use page::CalculatorPage;
