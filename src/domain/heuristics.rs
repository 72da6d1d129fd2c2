//! Tunable cutoffs used by the scorer, extractor and pattern detector.
//!
//! The defaults are empirically chosen values carried over from the journal's
//! rule set. They are parameters, not derived quantities; override them via
//! the `[heuristics]` config section.

pub const DEFAULT_HISTORY_LIMIT: usize = 20;
pub const DEFAULT_HISTORY_MIN_TRADES: usize = 3;
pub const DEFAULT_HISTORY_WINDOW: usize = 5;
pub const DEFAULT_OVER_TRADING_SAME_DAY: usize = 3;
pub const DEFAULT_EARLY_EXIT_MIN_WINS: usize = 2;
pub const DEFAULT_EARLY_EXIT_MAX_PIPS: f64 = 15.0;
pub const DEFAULT_LATE_ENTRY_MIN_LOSSES: usize = 2;
pub const DEFAULT_STOP_WIDTH_PIPS_PER_RR: f64 = 20.0;
pub const DEFAULT_BIG_WIN_PIPS: f64 = 20.0;
pub const DEFAULT_BIG_LOSS_PIPS: f64 = 30.0;
pub const DEFAULT_STRONG_TARGET_PIPS: f64 = 30.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Heuristics {
    /// History entries required before historical patterns are evaluated.
    pub history_min_trades: usize,
    /// How many of the most recent history entries are inspected.
    pub history_window: usize,
    pub over_trading_same_day: usize,
    pub early_exit_min_wins: usize,
    /// Every recent win must stay below this for `early_exit`.
    pub early_exit_max_pips: f64,
    pub late_entry_min_losses: usize,
    /// A loss larger than `rr_ratio * stop_width_pips_per_rr` is flagged as a wide stop.
    pub stop_width_pips_per_rr: f64,
    /// Win size that earns the larger outcome bonus in the execution score.
    pub big_win_pips: f64,
    /// Loss size that costs a point in the execution score.
    pub big_loss_pips: f64,
    /// Win size credited as strong target execution.
    pub strong_target_pips: f64,
}

impl Default for Heuristics {
    fn default() -> Self {
        Self {
            history_min_trades: DEFAULT_HISTORY_MIN_TRADES,
            history_window: DEFAULT_HISTORY_WINDOW,
            over_trading_same_day: DEFAULT_OVER_TRADING_SAME_DAY,
            early_exit_min_wins: DEFAULT_EARLY_EXIT_MIN_WINS,
            early_exit_max_pips: DEFAULT_EARLY_EXIT_MAX_PIPS,
            late_entry_min_losses: DEFAULT_LATE_ENTRY_MIN_LOSSES,
            stop_width_pips_per_rr: DEFAULT_STOP_WIDTH_PIPS_PER_RR,
            big_win_pips: DEFAULT_BIG_WIN_PIPS,
            big_loss_pips: DEFAULT_BIG_LOSS_PIPS,
            strong_target_pips: DEFAULT_STRONG_TARGET_PIPS,
        }
    }
}
