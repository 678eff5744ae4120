//! Canvas Program for the path map

use super::state::PathMapState;
use iced::widget::canvas::{self, Frame, Geometry, LineCap, LineJoin, Path, Program, Stroke};
use iced::{mouse, Color, Point, Rectangle, Theme};
use pathview_core::map::{CanvasPoint, MapProjection};
use pathview_core::WorldPoint;

/// Canvas program drawing the background map, the bucketed path and the
/// position marker. Purely visual: it publishes no messages.
pub struct PathMapCanvas<'a> {
    pub state: &'a PathMapState,
}

fn to_point(p: CanvasPoint) -> Point {
    Point::new(p.x, p.y)
}

impl<'a, Message> Program<Message> for PathMapCanvas<'a> {
    type State = ();

    fn draw(
        &self,
        _interaction: &Self::State,
        renderer: &iced::Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());

        // Nothing is drawn until the map image has loaded
        let Some(background) = &self.state.background else {
            frame.fill_rectangle(Point::ORIGIN, bounds.size(), Color::from_rgb(0.1, 0.1, 0.12));
            return vec![frame.into_geometry()];
        };

        frame.draw_image(
            Rectangle::new(Point::ORIGIN, bounds.size()),
            canvas::Image::new(background.clone()),
        );

        let render = &self.state.frame;
        let projection = MapProjection::new(
            self.state.bounds,
            bounds.width,
            bounds.height,
            self.state.margin,
        );

        // One stroke per minute bucket; buckets are never joined
        for (segment, samples) in render.polylines() {
            if samples.len() < 2 {
                continue;
            }

            let path = Path::new(|builder| {
                let mut points = samples
                    .iter()
                    .map(|s| to_point(projection.project(WorldPoint::from(s))));
                if let Some(start) = points.next() {
                    builder.move_to(start);
                    for p in points {
                        builder.line_to(p);
                    }
                }
            });

            frame.stroke(
                &path,
                Stroke::default()
                    .with_color(self.state.theme.segment_color(segment))
                    .with_width(self.state.line_width)
                    .with_line_cap(LineCap::Round)
                    .with_line_join(LineJoin::Round),
            );
        }

        if let Some(marker) = &render.marker {
            let center = to_point(projection.project(WorldPoint::from(marker)));
            frame.fill(
                &Path::circle(center, self.state.marker_radius),
                self.state.theme.marker,
            );
        }

        vec![frame.into_geometry()]
    }
}
