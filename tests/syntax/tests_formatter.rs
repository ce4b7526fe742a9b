//! Syntax Tests - Pretty Printing

use porser::syntax::{FormatOptions, pretty_sentence};

use crate::helpers::sentence_helpers::sentence;
use crate::helpers::source_fixtures::*;

#[test]
fn test_pretty_print_sample() {
    let pretty = pretty_sentence(&sentence(REVIVALISMO), &FormatOptions::default());
    let expected = "\
(S
  (NP
    (ART Um)
    (N revivalismo)
    (ADJP
      (ADJ refrescante))))";

    assert_eq!(pretty, expected);
}

#[test]
fn test_pretty_print_reparses() {
    let options = FormatOptions {
        tab_size: 4,
        ..FormatOptions::default()
    };
    for source in WELL_FORMED {
        let original = sentence(source);
        let pretty = pretty_sentence(&original, &options);
        assert_eq!(sentence(&pretty), original, "{pretty}");
    }
}
