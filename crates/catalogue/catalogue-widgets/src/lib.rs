//! Catalogue Widgets
//!
//! Static widget configurations built on the catalogue-layout engine.
//!
//! Every widget knows its intrinsic size ([`Measure`]) and can draw a
//! wireframe of itself into a solved frame on any `Rgb888` draw target.
//!
//! # Widgets
//!
//! - `Button` - titled or icon button, optionally presenting an alert
//! - `Label` - single-line, wrapping or attributed text
//! - `TextField` / `TextView` - text entry
//! - `Switch`, `Slider`, `Stepper`, `SegmentedControl`, `PageControl`
//! - `Picker`, `DatePicker` - wheels
//! - `Image`, `ActivityIndicator`, `ProgressView`
//! - `Table`, `TableCell`, `Collection`, `ScrollView`, `Container`
//!
//! # Example
//!
//! ```
//! use catalogue_widgets::prelude::*;
//!
//! let button: Widget = Button::titled("Custom Button")
//!     .style(ButtonStyle::filled(color::SYSTEM_BLUE, 8))
//!     .into();
//! assert_eq!(button.kind(), ElementKind::Button);
//! ```
//!
//! [`Measure`]: catalogue_layout::measure::Measure

pub mod alert;
pub mod button;
pub mod color;
pub mod container;
pub mod control;
mod draw;
pub mod field;
pub mod font;
pub mod label;
pub mod list;
pub mod media;
pub mod picker;
pub mod symbol;
pub mod widget;

pub use draw::TextAlign;

pub mod prelude {
    //! Widget types and colours.

    pub use crate::alert::*;
    pub use crate::button::*;
    pub use crate::color;
    pub use crate::container::*;
    pub use crate::control::*;
    pub use crate::field::*;
    pub use crate::font::*;
    pub use crate::label::*;
    pub use crate::list::*;
    pub use crate::media::*;
    pub use crate::picker::*;
    pub use crate::symbol::*;
    pub use crate::widget::*;
    pub use crate::TextAlign;
}
