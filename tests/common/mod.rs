#![allow(dead_code)]

use bunner_path_matcher::{AntPathMatcher, PathMatcher};

/// (pattern, path, full match)
pub const MATCH_CASES: &[(&str, &str, bool)] = &[
    ("test", "test", true),
    ("/test", "/test", true),
    ("https://example.org", "https://example.org", true),
    ("/test.jpg", "test.jpg", false),
    ("test", "/test", false),
    ("/test", "test", false),
    ("t?st", "test", true),
    ("??st", "test", true),
    ("tes?", "test", true),
    ("te??", "test", true),
    ("?es?", "test", true),
    ("tes?", "tes", false),
    ("tes?", "testt", false),
    ("tes?", "tsst", false),
    ("*", "test", true),
    ("test*", "test", true),
    ("test*", "testTest", true),
    ("test/*", "test/Test", true),
    ("test/*", "test/t", true),
    ("test/*", "test/", true),
    ("*test*", "AnothertestTest", true),
    ("*test", "Anothertest", true),
    ("*.*", "test.", true),
    ("*.*", "test.test", true),
    ("*.*", "test.test.test", true),
    ("test*aaa", "testblaaaa", true),
    ("test*", "tst", false),
    ("test*", "tsttest", false),
    ("test*", "test/", false),
    ("test*", "test/t", false),
    ("test/*", "test", false),
    ("*test*", "tsttst", false),
    ("*test", "tsttst", false),
    ("*.*", "tsttst", false),
    ("test*aaa", "test", false),
    ("test*aaa", "testblaaab", false),
    ("/?", "/a", true),
    ("/?/a", "/a/a", true),
    ("/a/?", "/a/b", true),
    ("/??/a", "/aa/a", true),
    ("/a/??", "/a/bb", true),
    ("/**", "/testing/testing", true),
    ("/*/**", "/testing/testing", true),
    ("/**/*", "/testing/testing", true),
    ("/bla/**/bla", "/bla/testing/testing/bla", true),
    ("/bla/**/bla", "/bla/testing/testing/bla/bla", true),
    ("/**/test", "/bla/bla/test", true),
    ("/bla/**/**/bla", "/bla/bla/bla/bla/bla/bla", true),
    ("/bla*bla/test", "/blaXXXbla/test", true),
    ("/*bla/test", "/XXXbla/test", true),
    ("/bla*bla/test", "/blaXXXbl/test", false),
    ("/*bla/test", "XXXblab/test", false),
    ("/*bla/test", "XXXbl/test", false),
    ("/????", "/bala/bla", false),
    ("/**/*bla", "/bla/bla/bla/bbb", false),
    (
        "/*bla*/**/bla/**",
        "/XXXblaXXXX/testing/testing/bla/testing/testing/",
        true,
    ),
    (
        "/*bla*/**/bla/*",
        "/XXXblaXXXX/testing/testing/bla/testing",
        true,
    ),
    (
        "/*bla*/**/bla/**",
        "/XXXblaXXXX/testing/testing/bla/testing/testing",
        true,
    ),
    (
        "/*bla*/**/bla/**",
        "/XXXblaXXXX/testing/testing/bla/testing/testing.jpg",
        true,
    ),
    (
        "*bla*/**/bla/**",
        "XXXblaXXXX/testing/testing/bla/testing/testing/",
        true,
    ),
    (
        "*bla*/**/bla/*",
        "XXXblaXXXX/testing/testing/bla/testing",
        true,
    ),
    (
        "*bla*/**/bla/**",
        "XXXblaXXXX/testing/testing/bla/testing/testing",
        true,
    ),
    (
        "*bla*/**/bla/*",
        "XXXblaXXXX/testing/testing/bla/testing/testing",
        false,
    ),
    ("/x/x/**/bla", "/x/x/x/", false),
    ("/foo/bar/**", "/foo/bar", true),
    ("/a/**/b/**/c", "/a/x/b/y/z/c", true),
    ("/a/**/b/**/c", "/a/x/y/c", false),
    ("", "", true),
    ("/{bla}.*", "/testing.html", true),
    ("/{bla}", "//x\ny", true),
    ("/{var:.*}", "/x\ny", true),
    ("/hotels/new", "/hotels/new", true),
    ("/hotels/new", "/hotels/old", false),
    ("/hotels/*", "/hotels/new", true),
    ("/hotels/*", "/hotels/new/york", false),
    ("/hotels/**", "/hotels/new/york", true),
    ("/hotels/**", "/hotels", true),
    ("/hotels/**", "/hotels/", true),
    ("/spr/{spr:[a-z]+}", "/spr/abc", true),
    ("/spr/{spr:[a-z]+}", "/spr/123", false),
];

pub fn assert_match_table(matcher: &AntPathMatcher) {
    for &(pattern, path, expected) in MATCH_CASES {
        let actual = matcher
            .matches(pattern, path)
            .expect("matching should not fail");
        assert_eq!(
            actual, expected,
            "match({pattern:?}, {path:?}) should be {expected}"
        );
    }
}
