// Host-side tests for palette resolution and the theme watcher.

use backdrop_core::*;
use std::cell::RefCell;
use std::rc::Rc;

#[test]
fn dark_mode_resolves_dark_constants() {
    let p = Palette::resolve(ThemeMode::from_attribute(Some("dark")));
    assert_eq!(p.background, Rgb(0x0d0d0d));
    assert_eq!(p.point, Rgb(0x00bcd4));
    assert_eq!(p.line, Rgb(0xffffff));
    assert_eq!(p.line_opacity, 0.25);
}

#[test]
fn any_other_mode_resolves_default_constants() {
    for raw in [Some("light"), None, Some("solarized"), Some(" dark")] {
        let p = Palette::resolve(ThemeMode::from_attribute(raw));
        assert_eq!(p.background, Rgb(0xf5f5f5), "raw={raw:?}");
        assert_eq!(p.point, Rgb(0x0077b6));
        assert_eq!(p.line, Rgb(0x111111));
        assert_eq!(p.line_opacity, 0.35);
    }
}

#[test]
fn watch_notifies_only_on_real_change() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let mut watch = ThemeWatch::new(ThemeMode::Light);
    let sink = seen.clone();
    watch.subscribe(move |mode| sink.borrow_mut().push(mode));

    assert!(!watch.notify(Some("light")));
    assert!(!watch.notify(None));
    assert!(watch.notify(Some("dark")));
    assert!(!watch.notify(Some("dark")));
    assert!(watch.notify(Some("light")));

    assert_eq!(*seen.borrow(), vec![ThemeMode::Dark, ThemeMode::Light]);
    assert_eq!(watch.current(), ThemeMode::Light);
}

#[test]
fn watch_drives_scene_rebuild() {
    use rand::SeedableRng;
    let mut rng = rand::rngs::StdRng::seed_from_u64(11);
    let scene = Rc::new(RefCell::new(NetworkScene::new(
        SceneConfig::default(),
        ThemeMode::Light,
        Viewport::new(640, 480),
        &mut rng,
    )));
    let mut watch = ThemeWatch::new(ThemeMode::Light);
    let target = scene.clone();
    watch.subscribe(move |mode| target.borrow_mut().apply_theme(mode));

    let gen0 = scene.borrow().lines().unwrap().generation();
    watch.notify(Some("dark"));
    let s = scene.borrow();
    assert_eq!(s.mode(), ThemeMode::Dark);
    assert_eq!(s.lines().unwrap().color(), DARK_PALETTE.line);
    assert!(s.lines().unwrap().generation() > gen0);
}
