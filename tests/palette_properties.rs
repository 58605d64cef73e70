use bitbar::palette::{
    CaseMatching, Context, Item, ItemId, Palette, PaletteInput, Scorer, SkimScorer,
};
use proptest::prelude::*;

fn items(labels: &[String]) -> Vec<Item<()>> {
    labels
        .iter()
        .enumerate()
        .map(|(i, label)| Item::new(format!("i{i}"), label.clone()).on_select(|_, _| {}))
        .collect()
}

fn open(labels: &[String], term: &str) -> Palette<()> {
    let mut palette = Palette::default();
    palette.initialize();
    palette.show_with(items(labels), term, Context::default());
    palette
}

fn displayed(palette: &Palette<()>) -> Vec<String> {
    palette
        .displayed_ids()
        .into_iter()
        .map(|id| id.to_string())
        .collect()
}

fn labels() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-zA-Z ]{1,12}", 1..20)
}

proptest! {
    #[test]
    fn empty_term_shows_everything_in_order(labels in labels()) {
        let palette = open(&labels, "");
        let expected: Vec<String> = (0..labels.len()).map(|i| format!("i{i}")).collect();
        prop_assert!(palette.is_visible());
        prop_assert_eq!(displayed(&palette), expected);
        prop_assert_eq!(palette.focused(), Some(&ItemId::from("i0")));
    }

    #[test]
    fn search_results_are_matching_subset(labels in labels(), term in "[a-zA-Z]{0,3}") {
        let palette = open(&labels, &term);
        let scorer = SkimScorer::new(CaseMatching::Smart);
        let shown = displayed(&palette);
        if !term.is_empty() {
            for id in &shown {
                let idx: usize = id[1..].parse().unwrap();
                prop_assert!(scorer.score(&labels[idx], &term).is_some());
            }
        }
        let unique: std::collections::HashSet<_> = shown.iter().collect();
        prop_assert_eq!(unique.len(), shown.len());
        prop_assert!(shown.len() <= labels.len());
        if let Some(first) = shown.first() {
            prop_assert_eq!(palette.focused().map(ItemId::to_string), Some(first.clone()));
        } else {
            prop_assert_eq!(palette.focused(), None);
        }
    }

    #[test]
    fn down_then_up_returns_to_first(labels in labels()) {
        let mut palette = open(&labels, "");
        palette.handle(PaletteInput::Up);
        prop_assert_eq!(palette.focused(), Some(&ItemId::from("i0")));
        palette.handle(PaletteInput::Down);
        palette.handle(PaletteInput::Up);
        prop_assert_eq!(palette.focused(), Some(&ItemId::from("i0")));
    }

    #[test]
    fn focus_never_wraps(labels in labels(), downs in 0usize..40) {
        let mut palette = open(&labels, "");
        for _ in 0..downs {
            palette.handle(PaletteInput::Down);
        }
        let expected = downs.min(labels.len() - 1);
        prop_assert_eq!(palette.focused(), Some(&ItemId::new(format!("i{expected}"))));
    }

    #[test]
    fn select_records_id_first(labels in labels(), pick in any::<prop::sample::Index>()) {
        let mut palette = open(&labels, "");
        let id = ItemId::new(format!("i{}", pick.index(labels.len())));
        prop_assert!(palette.select(&id));
        prop_assert!(!palette.is_visible());
        prop_assert_eq!(palette.context().history().first(), Some(&id));
    }

    #[test]
    fn select_missing_only_closes(labels in labels(), history in prop::collection::vec("[a-z]{1,4}", 0..5)) {
        let mut palette: Palette<()> = Palette::default();
        palette.initialize();
        let history: Vec<ItemId> = history.iter().map(|h| ItemId::new(format!("h-{h}"))).collect();
        palette.show_with(items(&labels), "", Context::default().with_history(history.clone()));
        prop_assert!(!palette.select(&ItemId::from("missing")));
        prop_assert!(!palette.is_visible());
        prop_assert_eq!(palette.context().history(), history.as_slice());
    }
}

#[test]
fn empty_set_stays_closed() {
    let mut palette: Palette<()> = Palette::default();
    palette.initialize();
    assert!(!palette.show_with(Vec::new(), "", Context::default()));
    assert!(!palette.is_visible());
}

#[test]
fn alpha_beta_scenario() {
    let mut palette = open(&["Alpha".to_string(), "Beta".to_string()], "");
    assert_eq!(displayed(&palette), vec!["i0", "i1"]);
    palette.search("bet");
    assert_eq!(displayed(&palette), vec!["i1"]);
    palette.handle(PaletteInput::Enter);
    assert!(!palette.is_visible());
    assert_eq!(palette.context().history(), &[ItemId::from("i1")]);
}
