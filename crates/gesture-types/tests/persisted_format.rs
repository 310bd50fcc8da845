use gesture_types::{GestureError, GestureSet};
use stroke_kernel::{Easing, Point2d};

const RECORDED: &str = r##"[
  {
    "index": 2,
    "points": [[120.5, 40.0], [118.0, 90.25], [116.0, 140.0]],
    "width": 7.5,
    "color": "#333333",
    "duration": 800,
    "easing": "ease-in-out"
  },
  {
    "index": 0,
    "points": [[20, 60], [140, 58]],
    "width": 9,
    "color": "#1f2933",
    "duration": 600
  },
  {
    "index": 1,
    "points": [[80, 15], [76, 140]],
    "width": 9,
    "color": "#1f2933",
    "easing": "linear"
  }
]"##;

#[test]
fn loads_a_recorded_character() {
    let set = GestureSet::from_json(RECORDED).unwrap();
    assert_eq!(set.len(), 3);
    let order: Vec<u32> = set.iter().map(|g| g.index).collect();
    assert_eq!(order, vec![0, 1, 2]);

    let last = set.get(2).unwrap();
    assert_eq!(last.points[1], Point2d::new(118.0, 90.25));
    assert_eq!(last.easing, Easing::EaseInOut);
    assert_eq!(set.get(0).unwrap().easing, Easing::Ease);
    assert_eq!(set.get(1).unwrap().duration, 0);
    assert_eq!(set.total_duration().as_millis(), 1400);
}

#[test]
fn round_trips_through_json() {
    let set = GestureSet::from_json(RECORDED).unwrap();
    let json = set.to_json().unwrap();
    let back = GestureSet::from_json(&json).unwrap();
    assert_eq!(back, set);
}

#[test]
fn rejects_malformed_points() {
    let bad = r##"[{ "index": 0, "points": [[1, 2, 3]], "width": 1, "color": "#000" }]"##;
    assert!(matches!(GestureSet::from_json(bad), Err(GestureError::Json(_))));
}
