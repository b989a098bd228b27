use super::*;

#[test]
fn embedded_json_cannot_close_script_element() {
    let text = embed_json(&"</script><script>alert(1)</script>").unwrap();
    assert!(!text.contains('<'));
    let back: String = serde_json::from_str(&text).unwrap();
    assert_eq!(back, "</script><script>alert(1)</script>");
}

#[test]
fn embedded_json_keeps_plain_values() {
    assert_eq!(embed_json(&vec!["a", "b"]).unwrap(), r#"["a","b"]"#);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_lookups_are_empty_natively() {
    assert_eq!(current_origin(), None);
    assert_eq!(read_embedded_json::<String>("careaid-draft"), None);
}
