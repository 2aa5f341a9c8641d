//! Top-level views.

mod monster_view;
pub use monster_view::MonsterView;
