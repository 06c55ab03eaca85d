pub mod accrual;
pub mod token;
