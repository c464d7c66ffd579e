//! Column-balancing layout for colbalance
//!
//! Items with measured sizes are packed greedily into vertical columns that
//! fit a viewport, the leftover width is shared between the columns, and
//! items are stacked top to bottom inside each column. When no column has
//! room and no new column fits horizontally, items overflow into the
//! shortest column and the host scrolls vertically.

mod column;
mod config;
mod constraints;
mod dump;
mod engine;
mod error;
mod item;
mod policy;

pub use column::*;
pub use config::*;
pub use constraints::*;
pub use dump::*;
pub use engine::*;
pub use error::*;
pub use item::*;
pub use policy::*;

pub use colbalance_ui_graphics::{Rect, Size};

pub mod prelude {
    pub use crate::config::{ColumnBalanceSpec, ColumnFit, SlackDistribution};
    pub use crate::constraints::{Constraints, Viewport};
    pub use crate::engine::{ItemPlacement, LayoutEngine, SizedLayout};
    pub use crate::error::LayoutError;
    pub use crate::item::{ColumnItem, MeasuredItem, SizeProvider};
    pub use crate::policy::{BalancedColumnsPolicy, MeasureResult};
    pub use colbalance_ui_graphics::{Rect, Size};
}
