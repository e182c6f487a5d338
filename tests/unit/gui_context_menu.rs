use super::*;

#[test]
fn menu_offers_every_preview_action() {
    let menu = ContextMenu::at(100, 100);
    let actions: Vec<_> = menu.items.iter().map(|(action, _)| *action).collect();
    assert_eq!(
        actions,
        vec![
            MenuAction::CopyText,
            MenuAction::ExportImage,
            MenuAction::ExportText,
            MenuAction::ShareX,
            MenuAction::ShareWhatsApp,
        ]
    );
}

#[test]
fn labels_match_the_actions() {
    let menu = ContextMenu::at(0, 0);
    let labels: Vec<_> = menu.items.iter().map(|(_, label)| *label).collect();
    assert_eq!(
        labels,
        vec![
            "Copy Text",
            "Download Image",
            "Export as Text",
            "Share on X",
            "Share on WhatsApp",
        ]
    );
}

#[test]
fn hit_test_outside_returns_none() {
    let menu = ContextMenu::at(100, 100);
    assert_eq!(menu.hit_test(50.0, 120.0, 1.0), None);
    assert_eq!(menu.hit_test(120.0, 50.0, 1.0), None);
    let below = (100 + menu.height(1.0)) as f64 + 1.0;
    assert_eq!(menu.hit_test(120.0, below, 1.0), None);
}

#[test]
fn hit_test_maps_rows_to_indices() {
    let menu = ContextMenu::at(100, 100);
    let ih = menu.item_height(1.0) as f64;

    assert_eq!(menu.hit_test(120.0, 100.0 + 3.0, 1.0), Some(0));
    assert_eq!(menu.hit_test(120.0, 100.0 + 3.0 + ih, 1.0), Some(1));
    assert_eq!(menu.hit_test(120.0, 100.0 + 3.0 + ih * 4.0, 1.0), Some(4));
}

#[test]
fn hit_test_scales_with_the_ui() {
    let menu = ContextMenu::at(0, 0);
    let ih = menu.item_height(2.0) as f64;
    assert_eq!(menu.hit_test(10.0, 3.0 + ih * 2.0, 2.0), Some(2));
}

#[test]
fn layout_emits_one_text_per_item() {
    let menu = ContextMenu::at(40, 60);
    let layout = menu.layout(1.0, 14.0);
    assert_eq!(layout.items.len(), 5);
    assert_eq!(layout.items[0].text.text, "Copy Text");
    assert_eq!(layout.bg.x, 40.0);
    assert_eq!(layout.bg.y, 60.0);
}

#[test]
fn only_the_hovered_item_gets_a_hover_rect() {
    let mut menu = ContextMenu::at(0, 0);
    menu.hover_index = Some(2);
    let layout = menu.layout(1.0, 14.0);
    for (i, item) in layout.items.iter().enumerate() {
        assert_eq!(item.hover_rect.is_some(), i == 2);
    }
}
