/// Extension of an entry name, leading dot included.
///
/// A name without a dot has none, and neither do dotfiles such as `.env`
/// or the `..` entry.
pub fn extension(name: &str) -> Option<&str> {
    match name.rfind('.') {
        None | Some(0) => None,
        Some(_) if name == ".." => None,
        Some(i) => Some(&name[i..]),
    }
}

/// `name` without its extension, or `None` if there is nothing to strip.
pub fn strip_extension(name: &str) -> Option<&str> {
    extension(name).map(|ext| &name[..name.len() - ext.len()])
}
