use std::path::{Component, Path};

/// Format a byte count as Bytes, KBytes or MBytes with two decimals
pub fn format_bytes(count: u64) -> String {
    let round = |v: f64| (v * 100.0).round() / 100.0;

    let kilo = round(count as f64 / 1024.0);
    let mega = round(kilo / 1024.0);

    if mega >= 1.0 {
        format!("{} MBytes", mega)
    } else if kilo >= 1.0 {
        format!("{} KBytes", kilo)
    } else {
        format!("{} Bytes", count)
    }
}

/// Last normal component of `name`, if there is one
pub fn safe_file_name(name: &str) -> Option<String> {
    Path::new(name)
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => part.to_str(),
            _ => None,
        })
        .last()
        .map(str::to_string)
}
