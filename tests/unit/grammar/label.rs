use spectretile::grammar::{CHILD_SLOTS, LEAF_LABELS, Label, SUBSTITUTION_RULES, SUPERTILES};

#[test]
fn test_symbol_tables_are_complete() {
    assert_eq!(SUPERTILES.len(), 9);
    assert_eq!(LEAF_LABELS.len(), 10);
    assert!(!LEAF_LABELS.contains(&Label::Gamma));
    assert!(LEAF_LABELS.contains(&Label::Gamma1));
    assert!(LEAF_LABELS.contains(&Label::Gamma2));
}

#[test]
fn test_indices_roundtrip() {
    for (index, symbol) in SUPERTILES.iter().enumerate() {
        assert_eq!(symbol.supertile_index(), Some(index));
    }
    for (index, label) in LEAF_LABELS.iter().enumerate() {
        assert_eq!(label.leaf_index(), Some(index));
    }
    assert_eq!(Label::Gamma1.supertile_index(), None);
    assert_eq!(Label::Gamma.leaf_index(), None);
}

#[test]
fn test_only_gamma_leaves_a_slot_empty() {
    for (parent, row) in SUBSTITUTION_RULES {
        assert_eq!(row.len(), CHILD_SLOTS);
        let empty = row.iter().filter(|slot| slot.is_none()).count();
        if parent == Label::Gamma {
            assert_eq!(empty, 1);
            assert!(row.get(2).is_some_and(Option::is_none));
        } else {
            assert_eq!(empty, 0);
        }
    }
}

#[test]
fn test_shared_row_structure() {
    // Every supertile resolves Delta at slot 1, Sigma at slot 4 and Gamma
    // at slot 7; children are always supertile symbols.
    for (_, row) in SUBSTITUTION_RULES {
        assert_eq!(row.get(1), Some(&Some(Label::Delta)));
        assert_eq!(row.get(4), Some(&Some(Label::Sigma)));
        assert_eq!(row.get(7), Some(&Some(Label::Gamma)));
        for child in row.iter().flatten() {
            assert!(child.supertile_index().is_some());
        }
    }
}

#[test]
fn test_row_lookup() {
    assert!(Label::Sigma.substitution_row().is_some_and(|row| {
        row.get(6) == Some(&Some(Label::Lambda))
    }));
    assert!(Label::Gamma1.substitution_row().is_none());
    assert!(Label::Gamma2.substitution_row().is_none());
}

#[test]
fn test_display_names() {
    assert_eq!(Label::Gamma.to_string(), "Gamma");
    assert_eq!(Label::Gamma2.to_string(), "Gamma2");
    assert_eq!(Label::Psi.as_str(), "Psi");
}
