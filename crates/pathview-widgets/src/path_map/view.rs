//! Path map view function

use super::canvas::PathMapCanvas;
use super::state::PathMapState;
use iced::widget::Canvas;
use iced::{Element, Length};

/// Create the path map element
///
/// The canvas is square, `state.canvas_size` pixels per side.
///
/// # Example
///
/// ```ignore
/// let map = path_map(&self.map_state);
/// column![map, transport].into()
/// ```
pub fn path_map<'a, Message>(state: &'a PathMapState) -> Element<'a, Message>
where
    Message: 'a,
{
    Canvas::new(PathMapCanvas { state })
        .width(Length::Fixed(state.canvas_size))
        .height(Length::Fixed(state.canvas_size))
        .into()
}
