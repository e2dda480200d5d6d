//! Trie integration tests
//!
//! End-to-end coverage of the string-keyed driver over the node layer, with
//! the stock filter policies swapped in.

use std::rc::Rc;

use trellis::trie::{DefaultingFilter, Trie};
use trellis::{Glyph, Result};

#[test]
fn autocomplete_shaped_workload() -> Result<()> {
    let trie: Trie<u32> = Trie::strict();
    for (word, rank) in [("car", 1), ("cart", 2), ("carbon", 3), ("care", 4)] {
        trie.set(word, rank)?;
    }
    assert_eq!(trie.len(), 4);

    // Shared prefixes share levels: root has exactly one child, 'c'.
    let root = trie.root();
    assert_eq!(root.child_count(), 1);
    let c = root.find_child(&Glyph::new("c")?).expect("'c' level exists");
    assert_eq!(c.child_count(), 1, "'a' is the only child of 'c'");

    assert_eq!(trie.get("carbon")?, Some(3));
    assert!(trie.get("carb")?.is_none(), "interior segment has no element");
    assert!(!trie.contains_key("ca"));
    assert!(trie.contains_key("car"));
    Ok(())
}

#[test]
fn overwriting_a_key_changes_no_structure() -> Result<()> {
    let trie: Trie<i32> = Trie::strict();
    trie.set("ab", 1)?;
    let before = trie.root().element_count();

    trie.set("ab", 2)?;
    assert_eq!(trie.get("ab")?, Some(2));
    assert_eq!(trie.root().element_count(), before);
    assert_eq!(trie.len(), 1);
    Ok(())
}

#[test]
fn defaulting_trie_reads_missing_keys_as_default() -> Result<()> {
    let trie: Trie<i64> = Trie::defaulting();
    trie.set("hit", 7)?;
    assert_eq!(trie.get("hit")?, Some(7));
    assert_eq!(trie.get("miss")?, Some(0));
    // The defaulting read materializes nothing.
    assert_eq!(trie.len(), 1);
    Ok(())
}

#[test]
fn custom_filter_instances_plug_in_unchanged() -> Result<()> {
    let trie: Trie<i32> = Trie::new(Rc::new(DefaultingFilter));
    assert_eq!(trie.get("anything")?, Some(0));
    Ok(())
}

#[test]
fn unicode_keys_group_by_grapheme_cluster() -> Result<()> {
    let trie: Trie<&str> = Trie::strict();
    // "é" precomposed and decomposed are different glyph sequences.
    trie.set("é", "precomposed")?;
    trie.set("e\u{0301}", "decomposed")?;

    assert_eq!(trie.get("é")?, Some("precomposed"));
    assert_eq!(trie.get("e\u{0301}")?, Some("decomposed"));
    // The decomposed form is one glyph, hence one level.
    assert_eq!(trie.root().child_count(), 2);
    assert_eq!(trie.len(), 2);
    Ok(())
}

#[test]
fn trie_wide_replace_spares_non_matches() -> Result<()> {
    let trie: Trie<i32> = Trie::strict();
    trie.set("a", 0)?;
    trie.set("b", 5)?;
    trie.set("c", 0)?;

    let replaced = trie.replace(Some(&0), Some(9));
    assert_eq!(replaced, 2);
    assert_eq!(trie.get("a")?, Some(9));
    assert_eq!(trie.get("b")?, Some(5));
    assert_eq!(trie.get("c")?, Some(9));
    Ok(())
}

#[test]
fn deep_keys_build_one_level_per_glyph() -> Result<()> {
    let trie: Trie<bool> = Trie::strict();
    let key = "abcdefghij";
    trie.set(key, true)?;

    let mut node = trie.root();
    let mut depth = 0;
    for glyph in Glyph::split(key) {
        node = node.find_child(&glyph).expect("level per glyph");
        depth += 1;
    }
    assert_eq!(depth, 10);
    assert!(node.is_leaf());
    assert_eq!(node.element(), Some(true));
    Ok(())
}
