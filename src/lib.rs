// src/lib.rs

// === 1. Declare all the top-level modules ===
pub mod agents;
pub mod arena;
pub mod clock;
pub mod config;
pub mod indicators;
pub mod persistence;
pub mod random;
pub mod simulators;
pub mod types;

// === 2. Re-export the public-facing components to create a clean API ===

// --- From `agents` ---
pub use agents::policy::{DecisionPolicy, TradeAction};
pub use agents::profile::{AgentProfile, DEFAULT_ROSTER, RosterEntry};
pub use agents::trader::TradingAgent;

// --- From the `arena` engine ---
pub use arena::{ArenaSimulator, StepOutcome};

// --- From `simulators` ---
pub use simulators::gbm::{MarketSample, PriceProcess};

// --- From `types` ---
pub use types::snapshot::{ArenaSnapshot, ArenaStats};
pub use types::trade::{Position, Trade, TradeKind};

// --- Determinism seams ---
pub use clock::{Clock, ManualClock, SystemClock};
pub use random::{RandomSource, SeededRandom, ThreadRandom};

// --- Persistence boundary ---
pub use persistence::{JsonFileStore, MemoryStore, SnapshotStore, StoreError, load_or_default};
