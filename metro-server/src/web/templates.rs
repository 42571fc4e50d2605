//! Askama templates for the web frontend.

use askama::Template;

use crate::network::Network;
use crate::planner::Route;

/// Padding around the outermost stations on the map.
const MAP_MARGIN: i32 = 100;

/// Distance from a station's centre to its name label.
const LABEL_OFFSET: i32 = 32;

// ============================================================================
// Page Templates (extend base.html)
// ============================================================================

/// Map page with the station form and (optionally) a route.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub map: MapView,
    pub options: Vec<StationOption>,
    pub message: Option<PanelMessage>,
    pub route: Option<RouteView>,
}

/// Error page.
#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub title: String,
    pub message: String,
}

// ============================================================================
// View Models (for templates)
// ============================================================================

/// Drawing of the whole network, with the current route highlighted.
#[derive(Debug, Clone)]
pub struct MapView {
    /// Top-left corner of the SVG viewBox.
    pub view_x: i32,
    pub view_y: i32,
    pub width: i32,
    pub height: i32,
    pub edges: Vec<EdgeView>,
    pub stations: Vec<StationView>,
}

impl MapView {
    /// Lay out every station and connection of a network.
    pub fn build(network: &Network, route: Option<&Route>) -> Self {
        let layout = network.layout();

        let mut edges: Vec<EdgeView> = network
            .graph()
            .edges()
            .filter_map(|(a, b, weight)| {
                let from = layout.get(a)?;
                let to = layout.get(b)?;
                let label = from.midpoint(to);
                Some(EdgeView {
                    x1: from.x,
                    y1: from.y,
                    x2: to.x,
                    y2: to.y,
                    label_x: label.x,
                    label_y: label.y,
                    weight,
                    highlighted: route.is_some_and(|r| r.uses_connection(a, b)),
                })
            })
            .collect();
        // Highlighted edges last, so they are drawn on top.
        edges.sort_by_key(|e| (e.highlighted, e.x1, e.y1, e.x2, e.y2));

        let mut stations: Vec<StationView> = layout
            .iter()
            .map(|(station, position)| StationView {
                name: station.to_string(),
                x: position.x,
                y: position.y,
                label_y: position.y + LABEL_OFFSET,
                highlighted: route.is_some_and(|r| r.visits(station)),
            })
            .collect();
        stations.sort_by(|a, b| a.name.cmp(&b.name));

        // Pad the bounding box on every side, wherever it sits.
        let (view_x, view_y, width, height) = layout
            .bounds()
            .map(|b| {
                (
                    b.min.x - MAP_MARGIN,
                    b.min.y - MAP_MARGIN,
                    b.width() + 2 * MAP_MARGIN,
                    b.height() + 2 * MAP_MARGIN,
                )
            })
            .unwrap_or((0, 0, MAP_MARGIN, MAP_MARGIN));

        Self {
            view_x,
            view_y,
            width,
            height,
            edges,
            stations,
        }
    }
}

/// A connection line with its weight label.
#[derive(Debug, Clone)]
pub struct EdgeView {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
    pub label_x: i32,
    pub label_y: i32,
    pub weight: u32,
    pub highlighted: bool,
}

impl EdgeView {
    pub fn stroke(&self) -> &'static str {
        if self.highlighted { "yellow" } else { "#22ffff" }
    }

    pub fn stroke_width(&self) -> u32 {
        if self.highlighted { 5 } else { 3 }
    }
}

/// A station marker with its name label.
#[derive(Debug, Clone)]
pub struct StationView {
    pub name: String,
    pub x: i32,
    pub y: i32,
    pub label_y: i32,
    pub highlighted: bool,
}

impl StationView {
    pub fn fill(&self) -> &'static str {
        if self.highlighted { "red" } else { "#ff00ff" }
    }
}

/// An entry in the From/To dropdowns.
#[derive(Debug, Clone)]
pub struct StationOption {
    pub name: String,
    pub selected_from: bool,
    pub selected_to: bool,
}

impl StationOption {
    /// Options for every station in the network, sorted by name.
    pub fn list(network: &Network, from: Option<&str>, to: Option<&str>) -> Vec<Self> {
        network
            .graph()
            .stations()
            .into_iter()
            .map(|s| StationOption {
                selected_from: from == Some(s.as_str()),
                selected_to: to == Some(s.as_str()),
                name: s.to_string(),
            })
            .collect()
    }
}

/// Severity of a side panel message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Warning,
    Info,
}

/// A message shown in the side panel instead of a route.
#[derive(Debug, Clone)]
pub struct PanelMessage {
    pub kind: MessageKind,
    pub title: String,
    pub text: String,
}

impl PanelMessage {
    pub fn missing_input() -> Self {
        Self {
            kind: MessageKind::Warning,
            title: "Missing Input".into(),
            text: "Choose both start and end stations.".into(),
        }
    }

    pub fn same_station() -> Self {
        Self {
            kind: MessageKind::Info,
            title: "Same Station".into(),
            text: "Both stations cannot be same.".into(),
        }
    }

    pub fn no_route() -> Self {
        Self {
            kind: MessageKind::Info,
            title: "No Route".into(),
            text: "No route found.".into(),
        }
    }

    /// CSS class for the message box.
    pub fn css_class(&self) -> &'static str {
        match self.kind {
            MessageKind::Warning => "message warning",
            MessageKind::Info => "message info",
        }
    }
}

/// A found route, for the side panel.
#[derive(Debug, Clone)]
pub struct RouteView {
    pub distance: u64,
    pub stops: Vec<String>,
}

impl RouteView {
    pub fn from_route(route: &Route) -> Self {
        Self {
            distance: route.distance(),
            stops: route.path().iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Station;
    use crate::network::Position;
    use crate::planner::RouteFinder;

    fn station(s: &str) -> Station {
        Station::parse(s).unwrap()
    }

    fn metro_route(from: &str, to: &str) -> (Network, Route) {
        let network = Network::metro().unwrap();
        let route = RouteFinder::new(network.graph())
            .find_route(&station(from), &station(to))
            .unwrap()
            .unwrap();
        (network, route)
    }

    #[test]
    fn map_without_route() {
        let network = Network::metro().unwrap();
        let map = MapView::build(&network, None);

        assert_eq!(map.stations.len(), 20);
        assert_eq!(map.edges.len(), 26);
        assert_eq!((map.view_x, map.view_y), (0, 0));
        assert_eq!(map.width, 750);
        assert_eq!(map.height, 730);
        assert!(map.edges.iter().all(|e| !e.highlighted));
        assert!(map.stations.iter().all(|s| !s.highlighted));
        assert_eq!(map.stations[0].name, "Station A");
        assert_eq!(map.stations[0].label_y, 132);
    }

    #[test]
    fn map_view_box_covers_negative_positions() {
        let network = Network::from_parts(
            vec![("West", vec![("East", 3)]), ("East", vec![("West", 3)])],
            vec![
                ("West", Position::new(-200, -50)),
                ("East", Position::new(40, 80)),
            ],
        )
        .unwrap();
        let map = MapView::build(&network, None);

        assert_eq!((map.view_x, map.view_y), (-300, -150));
        assert_eq!((map.width, map.height), (440, 330));
        for station in &map.stations {
            assert!(station.x >= map.view_x && station.x <= map.view_x + map.width);
            assert!(station.y >= map.view_y && station.label_y <= map.view_y + map.height);
        }
    }

    #[test]
    fn map_highlights_route() {
        let (network, route) = metro_route("Station A", "Station J");
        let map = MapView::build(&network, Some(&route));

        let lit_stations: Vec<_> = map
            .stations
            .iter()
            .filter(|s| s.highlighted)
            .map(|s| s.name.as_str())
            .collect();
        assert_eq!(
            lit_stations,
            vec!["Station A", "Station B", "Station C", "Station F", "Station J"]
        );

        let lit_edges: Vec<_> = map.edges.iter().filter(|e| e.highlighted).collect();
        assert_eq!(lit_edges.len(), 4);
        assert!(lit_edges.iter().all(|e| e.stroke() == "yellow" && e.stroke_width() == 5));

        // Highlighted edges are drawn last
        assert!(map.edges.last().unwrap().highlighted);
    }

    #[test]
    fn edge_label_at_midpoint() {
        let network = Network::metro().unwrap();
        let map = MapView::build(&network, None);

        // Station A (100,100) to Station B (230,100), weight 4
        let ab = map
            .edges
            .iter()
            .find(|e| (e.x1, e.y1, e.x2, e.y2) == (100, 100, 230, 100))
            .unwrap();
        assert_eq!(ab.weight, 4);
        assert_eq!((ab.label_x, ab.label_y), (165, 100));
    }

    #[test]
    fn station_options_selected() {
        let network = Network::metro().unwrap();
        let options = StationOption::list(&network, Some("Station B"), Some("Station T"));

        assert_eq!(options.len(), 20);
        assert_eq!(options[0].name, "Station A");
        assert!(options[1].selected_from);
        assert!(!options[1].selected_to);
        assert!(options[19].selected_to);
    }

    #[test]
    fn station_fill() {
        let view = StationView {
            name: "X".into(),
            x: 0,
            y: 0,
            label_y: 32,
            highlighted: false,
        };
        assert_eq!(view.fill(), "#ff00ff");
        assert_eq!(StationView { highlighted: true, ..view }.fill(), "red");
    }

    #[test]
    fn route_view_from_route() {
        let (_, route) = metro_route("Station A", "Station D");
        let view = RouteView::from_route(&route);

        assert_eq!(view.distance, 7);
        assert_eq!(view.stops, vec!["Station A", "Station D"]);
    }

    #[test]
    fn index_page_renders() {
        let (network, route) = metro_route("Station A", "Station J");
        let page = IndexTemplate {
            map: MapView::build(&network, Some(&route)),
            options: StationOption::list(&network, Some("Station A"), Some("Station J")),
            message: None,
            route: Some(RouteView::from_route(&route)),
        };

        let html = page.render().unwrap();
        assert!(html.contains("Metro Route Finder"));
        assert!(html.contains("Shortest Distance: 19"));
        assert!(html.contains("<svg"));
        assert!(html.contains("selected"));
    }

    #[test]
    fn index_page_renders_message() {
        let network = Network::metro().unwrap();
        let page = IndexTemplate {
            map: MapView::build(&network, None),
            options: StationOption::list(&network, None, None),
            message: Some(PanelMessage::same_station()),
            route: None,
        };

        let html = page.render().unwrap();
        assert!(html.contains("Both stations cannot be same."));
        assert!(!html.contains("Shortest Distance"));
    }
}
