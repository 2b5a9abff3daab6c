use super::*;

fn marker(id: &str, label: &str) -> HotspotMarker {
    HotspotMarker { id: id.into(), x: 0.5, y: 0.5, label: label.into(), content: format!("About {label}") }
}

fn map() -> HotspotProps {
    HotspotProps { hotspots: vec![marker("h1", "Hotspot 1"), marker("h2", "Hotspot 2")], ..HotspotProps::default() }
}

#[test]
fn discovering_twice_keeps_one_entry() {
    let mut spots = HotspotSession::new(&map());
    assert_eq!(spots.apply(&HotspotIntent::Discover("h1".into())), Outcome::Updated);
    assert_eq!(spots.apply(&HotspotIntent::Discover("h1".into())), Outcome::Ignored);
    assert_eq!(spots.discovered(), 1);
    assert!(spots.is_discovered("h1"));
}

#[test]
fn unknown_marker_is_ignored() {
    let mut spots = HotspotSession::new(&map());
    assert_eq!(spots.apply(&HotspotIntent::Discover("nope".into())), Outcome::Ignored);
    assert_eq!(spots.discovered(), 0);
}

#[test]
fn progress_and_active_marker() {
    let mut spots = HotspotSession::new(&map());
    spots.apply(&HotspotIntent::Discover("h2".into()));
    spots.apply(&HotspotIntent::Discover("h1".into()));
    assert_eq!((spots.discovered(), spots.total()), (2, 2));
    assert_eq!(spots.active().map(|m| m.label.as_str()), Some("Hotspot 1"));
    assert_eq!(spots.apply(&HotspotIntent::Discover("h2".into())), Outcome::Updated);
    assert_eq!(spots.discovered(), 2);
}

#[test]
fn reset_clears_discoveries() {
    let mut spots = HotspotSession::new(&map());
    spots.apply(&HotspotIntent::Discover("h1".into()));
    spots.apply(&HotspotIntent::Reset);
    assert_eq!(spots.discovered(), 0);
    assert!(spots.active().is_none());
    assert_eq!(spots.markers().len(), 2);
}
