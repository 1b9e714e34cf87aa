use crate::helpers::{load_page, open_page, MemoryStore};
use claim::assert_none;
use theme_toggle::{Glyph, Theme};

#[test]
fn one_click_from_default_goes_dark() {
    let mut page = load_page(None);

    assert_eq!(page.controller.toggle(), Theme::Dark);

    assert_eq!(page.attribute().as_deref(), Some("dark"));
    assert_eq!(page.persisted().as_deref(), Some("dark"));
    assert_eq!(page.glyph(), Some(Glyph::Sun));
}

#[test]
fn two_clicks_from_dark_come_back_to_dark() {
    let mut page = load_page(Some("dark"));

    page.controller.toggle();
    page.controller.toggle();

    assert_eq!(page.attribute().as_deref(), Some("dark"));
    assert_eq!(page.persisted().as_deref(), Some("dark"));
}

#[test]
fn toggling_twice_restores_any_start() {
    for start in [Theme::Light, Theme::Dark] {
        let mut page = load_page(Some(&start.to_string()));

        page.controller.toggle();
        page.assert_in_sync(start.toggled());

        page.controller.toggle();
        page.assert_in_sync(start);
    }
}

#[test]
fn every_transition_keeps_attribute_store_and_glyph_in_sync() {
    let mut page = load_page(None);
    let mut expected = Theme::Light;

    for _ in 0..5 {
        expected = expected.toggled();
        assert_eq!(page.controller.toggle(), expected);
        page.assert_in_sync(expected);
    }
}

#[test]
fn toggle_flips_the_attribute_as_currently_shown() {
    let mut page = load_page(None);
    page.surface.overwrite_attribute("dark");

    assert_eq!(page.controller.toggle(), Theme::Light);
    page.assert_in_sync(Theme::Light);
}

#[test]
fn unreadable_attribute_flips_the_controller_state() {
    let mut page = load_page(Some("dark"));
    page.surface.overwrite_attribute("sepia");

    assert_eq!(page.controller.toggle(), Theme::Light);
    page.assert_in_sync(Theme::Light);
}

#[test]
fn failing_store_still_switches_the_page() {
    let mut page = open_page(MemoryStore::failing());
    page.controller.initialize();

    assert_eq!(page.controller.toggle(), Theme::Dark);
    assert_eq!(page.attribute().as_deref(), Some("dark"));
    assert_eq!(page.glyph(), Some(Glyph::Sun));
    assert_none!(page.persisted());

    assert_eq!(page.controller.toggle(), Theme::Light);
    assert_eq!(page.glyph(), Some(Glyph::Moon));
}

#[test]
fn update_glyph_only_touches_the_glyph() {
    let mut page = load_page(None);

    page.controller.update_glyph(Theme::Dark);

    assert_eq!(page.glyph(), Some(Glyph::Sun));
    assert_eq!(page.attribute().as_deref(), Some("light"));
    assert_eq!(page.controller.theme(), Theme::Light);
}
