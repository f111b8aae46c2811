/// Derives the exported form of a field identifier by upper-casing only its
/// first character. Names are ASCII; anything beyond the first character is
/// left untouched.
pub fn export_name(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}
