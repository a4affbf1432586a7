pub mod analysis;
pub mod payment;
pub mod schedule;

pub use analysis::{amortize, analyze_loan, AmortizationOutput};
pub use payment::{compute_monthly_payment, monthly_rate};
pub use schedule::{compute_schedule, schedule_iter, total_interest, MonthlyPaymentRecord, ScheduleIter};
