//! Property-based tests for the deck builders.
//!
//! Randomized builds are driven by explicit seeds so every failure
//! proptest reports is replayable.

use proptest::prelude::*;

use deck_forge::{
    make_blank_deck, Catalog, CardKind, DeckBuilder, DeckConfig, DeckRng, Selector,
};

proptest! {
    /// Blank decks are empty for any capacity hint and store the name
    /// verbatim.
    #[test]
    fn blank_decks_are_empty(count in 0usize..1024, name in "[a-zA-Z0-9 ]{0,16}") {
        let deck = make_blank_deck(count, name.clone());

        prop_assert!(deck.is_empty());
        prop_assert_eq!(deck.size, 0);
        prop_assert_eq!(deck.name, name);
    }

    /// Simple random decks fill indices 0..count, each slot holding one
    /// of the catalog prototypes.
    #[test]
    fn simple_decks_fill_every_index(count in 0usize..256, seed: u64) {
        let catalog = Catalog::standard();
        let mut builder = DeckBuilder::new(&catalog, DeckRng::new(seed));

        let deck = builder.randomized_simple(count, "p");

        prop_assert_eq!(deck.card_count(), count);
        for i in 0..count as u32 {
            let card = deck.card_at(i);
            prop_assert!(card.is_some());
            prop_assert!(catalog.iter().any(|proto| Some(proto) == card));
        }
    }

    /// With every cap at 0 the cap test always passes, so configured
    /// decks are dense: exactly `total_cards` entries, no gaps.
    #[test]
    fn uncapped_configured_decks_are_dense(total in 0usize..256, seed: u64) {
        let catalog = Catalog::standard();
        let mut builder = DeckBuilder::new(&catalog, DeckRng::new(seed));

        let deck = builder.configured(DeckConfig::new(total), "p");

        prop_assert_eq!(deck.card_count(), total);
        for i in 0..total as u32 {
            prop_assert!(!deck.is_gap(i));
        }
    }

    /// Heat and Buff never exceed their caps; their overflow substitutes
    /// Score instead. Filled entries are always catalog prototypes and
    /// the mapping never exceeds `total_cards` entries.
    #[test]
    fn caps_bound_heat_and_buff(
        total in 0usize..128,
        nerf_cap in 1usize..4,
        buff_cap in 1usize..4,
        seed: u64,
    ) {
        let catalog = Catalog::standard();
        let mut builder = DeckBuilder::new(&catalog, DeckRng::new(seed));
        let config = DeckConfig::new(total)
            .with_nerf_cap(nerf_cap)
            .with_buff_cap(buff_cap);

        let deck = builder.configured(config, "p");

        prop_assert!(deck.card_count() <= total);

        let heat = deck.cards.values().filter(|c| c.kind == CardKind::Nerf).count();
        let buff = deck.cards.values().filter(|c| c.kind == CardKind::Buff).count();
        prop_assert!(heat <= nerf_cap);
        prop_assert!(buff <= buff_cap);

        for card in deck.cards.values() {
            prop_assert!(catalog.iter().any(|proto| proto == card));
        }
    }

    /// A capped Score kind never exceeds its cap: rejected Score draws
    /// leave gaps rather than inserting.
    #[test]
    fn score_cap_is_never_exceeded(
        total in 0usize..128,
        score_cap in 1usize..4,
        seed: u64,
    ) {
        let catalog = Catalog::standard();
        let mut builder = DeckBuilder::new(&catalog, DeckRng::new(seed));
        let config = DeckConfig::new(total).with_score_cap(score_cap);

        let deck = builder.configured(config, "p");

        // Heat and Buff are uncapped here, so no substitution happens
        // and every Score card came from an under-cap Score draw.
        let score = deck.cards.values().filter(|c| c.kind == CardKind::Score).count();
        prop_assert!(score <= score_cap);

        // Gap count equals the shortfall from a dense deck.
        let gaps = (0..total as u32).filter(|&i| deck.is_gap(i)).count();
        prop_assert_eq!(deck.card_count() + gaps, total);
    }

    /// Same seed, same deck: builds are fully reproducible.
    #[test]
    fn builds_are_deterministic(total in 0usize..128, seed: u64) {
        let catalog = Catalog::standard();
        let config = DeckConfig::new(total).with_score_cap(2).with_nerf_cap(3);

        let deck1 = DeckBuilder::new(&catalog, DeckRng::new(seed)).configured(config, "d");
        let deck2 = DeckBuilder::new(&catalog, DeckRng::new(seed)).configured(config, "d");

        prop_assert_eq!(deck1, deck2);
    }

    /// Selector draws stay in range and map onto the declared kinds.
    #[test]
    fn selector_draws_are_well_formed(seed: u64) {
        let mut rng = DeckRng::new(seed);

        for _ in 0..64 {
            let selector = Selector::draw(&mut rng);
            prop_assert!(selector.index() < Selector::COUNT);
            prop_assert_eq!(Selector::ALL[selector.index()], selector);
        }
    }
}
