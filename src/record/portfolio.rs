//! Portfolio summaries over stock holdings.

use crate::record::stock::Stock;

/// Total cost of all holdings, summed in order.
pub fn portfolio_cost(holdings: &[Stock]) -> f64 {
    holdings.iter().map(Stock::cost).sum()
}
