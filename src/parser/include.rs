/// Resolves an include path against the template that includes it.
///
/// Absolute paths are kept. Relative paths are joined to the directory of
/// `includer`, or kept unchanged when `includer` has no directory component.
/// The result is normalised with [`normalize_path`], so every spelling of a
/// file resolves to the same string.
pub fn resolve_include_path(includer: &str, path: &str) -> String {
    if path.starts_with('/') {
        return normalize_path(path);
    }

    match includer.rfind('/') {
        Some(idx) => normalize_path(&format!("{}/{path}", &includer[..idx])),
        None => normalize_path(path),
    }
}

/// Drops empty and `.` segments and folds `..` into the preceding segment.
///
/// A `..` above the root of an absolute path is dropped; leading `..` of a
/// relative path are kept.
pub fn normalize_path(path: &str) -> String {
    let absolute = path.starts_with('/');
    let mut segments: Vec<&str> = Vec::new();

    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => match segments.last() {
                Some(&last) if last != ".." => {
                    segments.pop();
                }
                _ if absolute => {}
                _ => segments.push(".."),
            },
            _ => segments.push(segment),
        }
    }

    let joined = segments.join("/");

    if absolute {
        format!("/{joined}")
    } else {
        joined
    }
}
