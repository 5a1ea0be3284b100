//! Month-by-month multi-debt payoff simulation

use chrono::{Local, Months, NaiveDate};
use log::{debug, warn};

use super::schedule::{PayoffResult, ScheduleEntry, TimelineEntry};
use super::state::SimulationState;
use super::Strategy;
use crate::amortization::PayoffHorizon;
use crate::debt::{validate_debts, Debt};
use crate::error::{PayoffError, Result};

/// Hard stop for the monthly loop (50 years)
pub const DEFAULT_MAX_MONTHS: u32 = 600;

/// Balances at or below this are treated as paid off
pub const DEFAULT_PAYOFF_EPSILON: f64 = 0.01;

/// Configuration for a simulation run
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    /// Months to simulate before declaring the plan non-convergent
    pub max_months: u32,

    /// Residual balance that counts as cleared
    pub payoff_epsilon: f64,

    /// Date month 0 is anchored to; `None` uses today's local date
    pub start_date: Option<NaiveDate>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            max_months: DEFAULT_MAX_MONTHS,
            payoff_epsilon: DEFAULT_PAYOFF_EPSILON,
            start_date: None,
        }
    }
}

/// Multi-debt payoff simulator
#[derive(Debug, Clone, Default)]
pub struct PayoffSimulator {
    config: SimulationConfig,
}

impl PayoffSimulator {
    pub fn new(config: SimulationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Copy of this simulator with the start date pinned, so paired runs share it
    pub fn anchored(&self) -> Self {
        Self::new(SimulationConfig {
            start_date: Some(self.start_date()),
            ..self.config.clone()
        })
    }

    pub fn start_date(&self) -> NaiveDate {
        self.config
            .start_date
            .unwrap_or_else(|| Local::now().date_naive())
    }

    /// Simulate paying off `debts` under `strategy` with a monthly `extra_payment`
    ///
    /// Every active debt receives its own payment each month; the first
    /// unpaid debt in strategy order also receives the rollover pool. When a
    /// debt clears, its payment joins the pool from the following month on.
    pub fn simulate(&self, debts: &[Debt], strategy: Strategy, extra_payment: f64) -> Result<PayoffResult> {
        if !extra_payment.is_finite() || extra_payment < 0.0 {
            return Err(PayoffError::NegativeExtraPayment(extra_payment));
        }
        let epsilon = self.config.payoff_epsilon;
        if !epsilon.is_finite() || epsilon < 0.0 {
            return Err(PayoffError::InvalidPayoffEpsilon(epsilon));
        }
        validate_debts(debts)?;

        let mut order: Vec<Debt> = debts.iter().filter(|d| d.balance > 0.0).cloned().collect();
        strategy.order(&mut order);

        let mut state = SimulationState::new(order.iter().map(|d| d.balance), extra_payment);
        let mut schedule = Vec::new();

        while state.has_balance() && state.month < self.config.max_months {
            state.advance_month();
            self.settle_month(&order, &mut state, &mut schedule);
        }

        let total_months = if state.has_balance() {
            warn!(
                "{} plan did not converge within {} months",
                strategy, self.config.max_months
            );
            PayoffHorizon::Never
        } else {
            PayoffHorizon::Months(state.month)
        };

        let projected_debt_free_date = total_months
            .as_option()
            .and_then(|m| self.start_date().checked_add_months(Months::new(m)));

        let mut timeline: Vec<TimelineEntry> = order
            .iter()
            .zip(&state.debts)
            .filter_map(|(debt, working)| {
                working.paid_off_month.map(|payoff_month| TimelineEntry {
                    debt_id: debt.id.clone(),
                    debt_name: debt.name.clone(),
                    payoff_month,
                    original_balance: debt.balance,
                })
            })
            .collect();
        timeline.sort_by_key(|t| t.payoff_month);

        debug!(
            "{} run: {:?}, interest {:.2}, {} schedule rows",
            strategy,
            total_months,
            state.total_interest,
            schedule.len()
        );

        Ok(PayoffResult {
            strategy,
            total_months,
            total_interest: state.total_interest,
            total_starting_debt: order.iter().map(|d| d.balance).sum(),
            projected_debt_free_date,
            timeline,
            schedule,
            final_order: order,
        })
    }

    /// Settle one month for every active debt, in strategy order
    fn settle_month(&self, order: &[Debt], state: &mut SimulationState, schedule: &mut Vec<ScheduleEntry>) {
        let focus = state.focus_index();
        let pool = state.available_extra;
        let mut freed = 0.0;

        for (idx, debt) in order.iter().enumerate() {
            let balance = state.debts[idx].balance;
            if balance <= 0.0 {
                continue;
            }

            let interest = balance * debt.monthly_rate();
            let scheduled = debt.effective_payment();
            let offered = if focus == Some(idx) { scheduled + pool } else { scheduled };

            let mut principal = (offered - interest).min(balance);
            let mut remaining = balance - principal;

            // Fold sub-epsilon residue into the final payment
            let cleared = remaining <= 0.0 || remaining <= self.config.payoff_epsilon;
            if cleared {
                principal = balance;
                remaining = 0.0;
            }
            let applied = principal + interest;
            let extra_applied = if focus == Some(idx) {
                (applied - scheduled).clamp(0.0, pool)
            } else {
                0.0
            };

            state.total_interest += interest;
            state.debts[idx].balance = remaining;

            schedule.push(ScheduleEntry {
                month: state.month,
                debt_id: debt.id.clone(),
                debt_name: debt.name.clone(),
                payment: applied,
                principal,
                interest,
                remaining_balance: remaining,
                extra_applied,
            });

            if cleared {
                state.debts[idx].paid_off_month = Some(state.month);
                freed += scheduled;
                debug!("month {}: '{}' paid off, {:.2} rolls over", state.month, debt.name, scheduled);
            }
        }

        state.roll_over(freed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::debt::DebtKind;
    use approx::assert_relative_eq;
    use std::collections::HashMap;

    fn simulator() -> PayoffSimulator {
        PayoffSimulator::new(SimulationConfig {
            start_date: NaiveDate::from_ymd_opt(2025, 1, 15),
            ..Default::default()
        })
    }

    fn two_cards() -> Vec<Debt> {
        vec![
            Debt::new("a", DebtKind::CreditCard, "Card A", 1000.0, 24.0, 50.0),
            Debt::new("b", DebtKind::CreditCard, "Card B", 500.0, 12.0, 30.0),
        ]
    }

    #[test]
    fn test_avalanche_targets_highest_rate() {
        let result = simulator().simulate(&two_cards(), Strategy::Avalanche, 0.0).unwrap();

        assert_eq!(result.final_order[0].id, "a");
        assert_eq!(result.total_months, PayoffHorizon::Months(24));
        assert_relative_eq!(result.total_interest, 330.95, epsilon = 0.01);
        assert_eq!(result.projected_debt_free_date, NaiveDate::from_ymd_opt(2027, 1, 15));

        // B clears first on its own payment, then its 30 rolls onto A
        assert_eq!(result.timeline[0].debt_id, "b");
        assert_eq!(result.timeline[0].payoff_month, 19);
        assert_eq!(result.timeline[1].payoff_month, 24);
    }

    #[test]
    fn test_rollover_feeds_focus_debt() {
        let result = simulator().simulate(&two_cards(), Strategy::Avalanche, 0.0).unwrap();

        for entry in result.entries_for("a") {
            if entry.month <= 19 {
                assert_eq!(entry.extra_applied, 0.0);
            } else if entry.month < 24 {
                assert_relative_eq!(entry.extra_applied, 30.0, epsilon = 1e-9);
                assert_relative_eq!(entry.payment, 80.0, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn test_avalanche_interest_not_above_snowball() {
        let sim = simulator();
        for extra in [0.0, 25.0, 100.0] {
            let avalanche = sim.simulate(&two_cards(), Strategy::Avalanche, extra).unwrap();
            let snowball = sim.simulate(&two_cards(), Strategy::Snowball, extra).unwrap();
            assert!(avalanche.total_interest <= snowball.total_interest + 1e-9);
        }

        let avalanche = sim.simulate(&two_cards(), Strategy::Avalanche, 100.0).unwrap();
        let snowball = sim.simulate(&two_cards(), Strategy::Snowball, 100.0).unwrap();
        assert_relative_eq!(avalanche.total_interest, 121.16, epsilon = 0.01);
        assert_relative_eq!(snowball.total_interest, 143.90, epsilon = 0.01);
        assert_eq!(snowball.first_payoff_month(), Some(4));
        assert_eq!(avalanche.first_payoff_month(), Some(8));
    }

    #[test]
    fn test_conservation_per_entry() {
        let result = simulator().simulate(&two_cards(), Strategy::Snowball, 40.0).unwrap();
        let debts = two_cards();
        let mut previous: HashMap<&str, f64> = debts.iter().map(|d| (d.id.as_str(), d.balance)).collect();

        for entry in &result.schedule {
            assert_relative_eq!(entry.principal + entry.interest, entry.payment, epsilon = 1e-9);
            let prev = previous.get_mut(entry.debt_id.as_str()).unwrap();
            assert_relative_eq!(entry.remaining_balance, *prev - entry.principal, epsilon = 1e-9);
            *prev = entry.remaining_balance;
        }
        assert!(previous.values().all(|&b| b == 0.0));
    }

    #[test]
    fn test_simulation_is_idempotent() {
        let sim = simulator();
        let first = sim.simulate(&two_cards(), Strategy::Snowball, 35.0).unwrap();
        let second = sim.simulate(&two_cards(), Strategy::Snowball, 35.0).unwrap();

        assert_eq!(first.total_months, second.total_months);
        assert_eq!(first.total_interest, second.total_interest);
        assert_eq!(first.schedule, second.schedule);
        assert_eq!(first.timeline, second.timeline);
    }

    #[test]
    fn test_single_debt_matches_closed_form() {
        let debts = vec![Debt::new("x", DebtKind::CreditCard, "X", 5000.0, 18.0, 100.0)];
        let result = simulator().simulate(&debts, Strategy::Avalanche, 0.0).unwrap();

        assert_eq!(result.total_months, PayoffHorizon::Months(94));
        // Final payment is partial, so simulated interest sits below 100*94 - 5000
        assert!(result.total_interest < 4400.0);
        assert_relative_eq!(result.total_interest, 4311.18, epsilon = 0.01);
    }

    #[test]
    fn test_cap_reached_is_non_convergent() {
        let debts = vec![
            Debt::new("x", DebtKind::CreditCard, "X", 1000.0, 20.0, 15.0),
            Debt::new("y", DebtKind::CreditCard, "Y", 2000.0, 30.0, 40.0),
        ];
        let result = simulator().simulate(&debts, Strategy::Avalanche, 0.0).unwrap();

        assert_eq!(result.total_months, PayoffHorizon::Never);
        assert_eq!(result.projected_debt_free_date, None);
        assert!(!result.is_payable());
        assert!(result.timeline.is_empty());
        assert_eq!(result.schedule.last().unwrap().month, DEFAULT_MAX_MONTHS);
    }

    #[test]
    fn test_custom_cap() {
        let sim = PayoffSimulator::new(SimulationConfig {
            max_months: 12,
            start_date: NaiveDate::from_ymd_opt(2025, 1, 1),
            ..Default::default()
        });
        let result = sim.simulate(&two_cards(), Strategy::Avalanche, 0.0).unwrap();
        assert_eq!(result.total_months, PayoffHorizon::Never);
        assert_eq!(result.schedule.len(), 24);
    }

    #[test]
    fn test_zero_balances_excluded() {
        let mut debts = two_cards();
        debts.push(Debt::new("z", DebtKind::Loan, "Paid", 0.0, 30.0, 100.0));
        let result = simulator().simulate(&debts, Strategy::Avalanche, 0.0).unwrap();

        assert_eq!(result.final_order.len(), 2);
        assert!(result.entries_for("z").next().is_none());
        // The zero-balance debt's payment is not in the pool
        assert_eq!(result.total_months, PayoffHorizon::Months(24));
    }

    #[test]
    fn test_no_debts() {
        let result = simulator().simulate(&[], Strategy::Snowball, 50.0).unwrap();
        assert_eq!(result.total_months, PayoffHorizon::Months(0));
        assert!(result.schedule.is_empty());
        assert_eq!(result.projected_debt_free_date, NaiveDate::from_ymd_opt(2025, 1, 15));
    }

    #[test]
    fn test_paid_off_debts_get_no_further_rows() {
        let result = simulator().simulate(&two_cards(), Strategy::Avalanche, 0.0).unwrap();
        let b_rows: Vec<_> = result.entries_for("b").collect();
        assert_eq!(b_rows.len(), 19);
        assert_eq!(b_rows.last().unwrap().remaining_balance, 0.0);
    }

    #[test]
    fn test_focus_debt_by_month() {
        let result = simulator().simulate(&two_cards(), Strategy::Snowball, 100.0).unwrap();
        assert_eq!(result.focus_debt(1).unwrap().id, "b");
        assert_eq!(result.focus_debt(4).unwrap().id, "b");
        assert_eq!(result.focus_debt(5).unwrap().id, "a");
        assert!(result.focus_debt(11).is_none());
    }

    #[test]
    fn test_larger_epsilon_clears_earlier() {
        let debts = vec![Debt::new("x", DebtKind::Loan, "X", 100.0, 0.0, 24.0)];
        let default = simulator().simulate(&debts, Strategy::Avalanche, 0.0).unwrap();
        let loose = PayoffSimulator::new(SimulationConfig {
            payoff_epsilon: 5.0,
            start_date: NaiveDate::from_ymd_opt(2025, 1, 15),
            ..Default::default()
        })
        .simulate(&debts, Strategy::Avalanche, 0.0)
        .unwrap();

        assert_eq!(default.timeline[0].payoff_month, 5);
        assert_eq!(loose.timeline[0].payoff_month, 4);
        assert_eq!(loose.total_months, PayoffHorizon::Months(4));

        // The 4 left over is folded into the final payment
        let last = loose.schedule.last().unwrap();
        assert_relative_eq!(last.principal, 28.0, epsilon = 1e-9);
        assert_relative_eq!(last.payment, last.principal + last.interest, epsilon = 1e-9);
        assert_eq!(last.remaining_balance, 0.0);
    }

    #[test]
    fn test_larger_epsilon_keeps_conservation() {
        let sim = PayoffSimulator::new(SimulationConfig {
            payoff_epsilon: 5.0,
            start_date: NaiveDate::from_ymd_opt(2025, 1, 15),
            ..Default::default()
        });
        let result = sim.simulate(&two_cards(), Strategy::Avalanche, 0.0).unwrap();
        let debts = two_cards();
        let mut previous: HashMap<&str, f64> = debts.iter().map(|d| (d.id.as_str(), d.balance)).collect();

        for entry in &result.schedule {
            assert_relative_eq!(entry.principal + entry.interest, entry.payment, epsilon = 1e-9);
            let prev = previous.get_mut(entry.debt_id.as_str()).unwrap();
            assert_relative_eq!(entry.remaining_balance, *prev - entry.principal, epsilon = 1e-9);
            *prev = entry.remaining_balance;
        }
        assert_eq!(result.timeline.len(), 2);
    }

    #[test]
    fn test_invalid_epsilon_rejected() {
        for epsilon in [-1.0, f64::NAN, f64::INFINITY] {
            let sim = PayoffSimulator::new(SimulationConfig {
                payoff_epsilon: epsilon,
                ..Default::default()
            });
            assert!(matches!(
                sim.simulate(&two_cards(), Strategy::Avalanche, 0.0),
                Err(PayoffError::InvalidPayoffEpsilon(_))
            ));
        }
    }

    #[test]
    fn test_zero_epsilon_still_records_payoffs() {
        let sim = PayoffSimulator::new(SimulationConfig {
            payoff_epsilon: 0.0,
            start_date: NaiveDate::from_ymd_opt(2025, 1, 15),
            ..Default::default()
        });
        let result = sim.simulate(&two_cards(), Strategy::Avalanche, 0.0).unwrap();
        assert_eq!(result.timeline.len(), 2);
        assert_eq!(result.total_months, PayoffHorizon::Months(24));
    }

    #[test]
    fn test_invalid_inputs_rejected() {
        let sim = simulator();
        assert!(matches!(
            sim.simulate(&two_cards(), Strategy::Avalanche, -1.0),
            Err(PayoffError::NegativeExtraPayment(_))
        ));

        let mut debts = two_cards();
        debts[1].balance = -20.0;
        assert!(matches!(
            sim.simulate(&debts, Strategy::Avalanche, 0.0),
            Err(PayoffError::NegativeBalance { .. })
        ));
    }

    #[test]
    fn test_per_debt_extra_rolls_over() {
        let debts = vec![
            Debt::new("a", DebtKind::CreditCard, "Card A", 1000.0, 24.0, 50.0),
            Debt::new("b", DebtKind::CreditCard, "Card B", 500.0, 12.0, 30.0).with_extra_payment(20.0),
        ];
        let plain = simulator().simulate(&two_cards(), Strategy::Avalanche, 0.0).unwrap();
        let boosted = simulator().simulate(&debts, Strategy::Avalanche, 0.0).unwrap();

        let b_payoff = boosted.timeline[0].payoff_month;
        assert!(b_payoff < 19);
        let a_after = boosted
            .entries_for("a")
            .find(|e| e.month == b_payoff + 1)
            .unwrap();
        assert_relative_eq!(a_after.extra_applied, 50.0, epsilon = 1e-9);
        assert!(boosted.total_interest < plain.total_interest);
    }
}
