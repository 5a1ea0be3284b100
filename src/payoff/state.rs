//! Mutable state carried across the monthly simulation loop

/// Working copy of one debt's balance
#[derive(Debug, Clone)]
pub struct WorkingDebt {
    /// Balance after the most recent month
    pub balance: f64,

    /// Month in which the balance reached zero
    pub paid_off_month: Option<u32>,
}

impl WorkingDebt {
    pub fn is_active(&self) -> bool {
        self.balance > 0.0
    }
}

/// State of a simulation run, indexed in strategy order
#[derive(Debug, Clone)]
pub struct SimulationState {
    /// Current month (1-indexed, 0 before the first month)
    pub month: u32,

    /// One entry per debt, same order as the ordered debt list
    pub debts: Vec<WorkingDebt>,

    /// Discretionary pool applied to the focus debt each month
    pub available_extra: f64,

    /// Interest accrued so far across all debts
    pub total_interest: f64,
}

impl SimulationState {
    /// Start a run from the opening balances and the caller's extra payment
    pub fn new(balances: impl IntoIterator<Item = f64>, extra_payment: f64) -> Self {
        Self {
            month: 0,
            debts: balances
                .into_iter()
                .map(|balance| WorkingDebt {
                    balance,
                    paid_off_month: None,
                })
                .collect(),
            available_extra: extra_payment,
            total_interest: 0.0,
        }
    }

    pub fn advance_month(&mut self) {
        self.month += 1;
    }

    pub fn has_balance(&self) -> bool {
        self.debts.iter().any(WorkingDebt::is_active)
    }

    /// First debt in strategy order that still owes money
    pub fn focus_index(&self) -> Option<usize> {
        self.debts.iter().position(WorkingDebt::is_active)
    }

    /// Fold a cleared debt's payment into the pool for later months
    pub fn roll_over(&mut self, freed_payment: f64) {
        self.available_extra += freed_payment;
    }
}
