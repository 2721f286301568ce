#![cfg(test)]
use crate::util::{hits, sorted};
use iprefix_common::error::Error;
use iprefix_common::network::address::Address;
use iprefix_common::network::target::Target;
use iprefix_core::{expand_cidr, expand_range, resolve};

#[test]
fn cidr_scenarios() {
    assert_eq!(expand_cidr("127.0.0.1/8").unwrap(), ["127.*"]);
    assert_eq!(
        sorted(&expand_cidr("127.0.0.1/30").unwrap()),
        sorted(&["127.0.0.0", "127.0.0.1", "127.0.0.2", "127.0.0.3"])
    );
    assert_eq!(sorted(&expand_cidr("::1/127").unwrap()), sorted(&["::", "::1"]));
    assert_eq!(
        sorted(&expand_cidr("::ffff:10.0.0.0/111").unwrap()),
        sorted(&["::ffff:10.0.*", "::ffff:10.1.*"])
    );
}

#[test]
fn cidr_nibble_aligned_v6() {
    let expected: Vec<String> = (0x20..=0x2f).map(|v| format!("2001:{v:x}:*")).collect();
    let patterns = expand_cidr("2001:20::/28").unwrap();
    assert_eq!(patterns.len(), 16);
    assert_eq!(sorted(&patterns), sorted(&expected));
}

#[test]
fn range_scenarios() {
    assert_eq!(
        sorted(&expand_range("10.0.0.254", "10.0.2.1").unwrap()),
        sorted(&["10.0.0.254", "10.0.0.255", "10.0.2.1", "10.0.2.0", "10.0.1.*"])
    );
    assert_eq!(
        sorted(&expand_range("10.0.254.255", "10.2.2.0").unwrap()),
        sorted(&[
            "10.0.254.255",
            "10.0.255.*",
            "10.1.*",
            "10.2.0.*",
            "10.2.1.*",
            "10.2.2.0"
        ])
    );
}

#[test]
fn range_whole_v4_space() {
    let patterns = expand_range("0.0.0.0", "255.255.255.255").unwrap();
    assert_eq!(patterns.len(), 256);
    assert_eq!(patterns[0], "0.*");
    assert_eq!(patterns[255], "255.*");
}

#[test]
fn singletons_are_canonical() {
    for text in ["10.0.0.1", "::", "::1", "2001:db8:0:0:1:0:0:1", "::ffff:192.0.2.1"] {
        let addr: Address = text.parse().unwrap();
        let expected = vec![addr.to_string()];
        assert_eq!(expand_range(text, text).unwrap(), expected, "{text}");

        let width = addr.family().width();
        assert_eq!(expand_cidr(&format!("{text}/{width}")).unwrap(), expected, "{text}");
    }
}

#[test]
fn errors_are_reported() {
    assert!(matches!(expand_cidr("10.0.0.0"), Err(Error::Parse { .. })));
    assert!(matches!(expand_cidr("::/129"), Err(Error::PrefixLength { .. })));
    assert!(matches!(
        expand_range("10.0.0.1", "::1"),
        Err(Error::TypeMismatch { .. })
    ));
    assert!(matches!(
        expand_range("10.0.0.9", "10.0.0.1"),
        Err(Error::Order { .. })
    ));
}

#[test]
fn resolved_v6_range_covers_its_edges() {
    let target: Target = "2001:db8::fffe-2001:db8::1:1".parse().unwrap();
    let patterns = resolve(&target);
    for text in ["2001:db8::fffe", "2001:db8::ffff", "2001:db8::1:0", "2001:db8::1:1"] {
        let addr: Address = text.parse().unwrap();
        assert_eq!(hits(&patterns, &addr), 1, "{text} in {patterns:?}");
    }
}
