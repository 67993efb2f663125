//! Calculation logic for the Timecard Engine.
//!
//! This module contains the pure time-accounting functions: worked hours from
//! clock events, unpaid break deductions, the regular/overtime split, wage
//! estimates, break labels, record inspection and tenure. The daily summary
//! and timecard builders compose them into reportable rows with an audit
//! trace.

mod break_labels;
mod daily_summary;
mod paid_hours;
mod record_checks;
mod rounding;
mod tenure;
mod timecard;
mod unpaid_breaks;
mod wages;
mod worked_hours;

pub use break_labels::{UNKNOWN_BREAK_LENGTH, format_break_length, format_break_type};
pub use daily_summary::{DailySummaryResult, summarize_day};
pub use paid_hours::split_paid_hours;
pub use record_checks::{
    BREAK_DURATION_MISMATCH, CLOCK_OUT_BEFORE_CLOCK_IN, INCOMPLETE_RECORD, OPEN_BREAK,
    STORED_TOTAL_MISMATCH, UNPAID_BREAK_WITHOUT_DURATION, inspect_record,
};
pub use rounding::round_2dp;
pub use tenure::{calculate_tenure, milestone_for_years, parse_hire_date, tenure_as_of_today};
pub use timecard::build_timecard;
pub use unpaid_breaks::{compute_unpaid_break_hours, unpaid_break_minutes};
pub use wages::estimate_wages;
pub use worked_hours::{compute_total_hours, compute_worked_hours};
