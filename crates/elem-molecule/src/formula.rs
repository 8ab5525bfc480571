//! Empirical formula strings.

use std::collections::BTreeMap;

/// Element counts keyed by symbol.
pub fn element_counts<'a, I>(symbols: I) -> BTreeMap<&'a str, usize>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut counts = BTreeMap::new();
    for symbol in symbols {
        *counts.entry(symbol).or_insert(0) += 1;
    }
    counts
}

/// Hill order: carbon, then hydrogen, then the rest alphabetically.
/// Without carbon every element, hydrogen included, is alphabetical.
pub fn hill_formula(counts: &BTreeMap<&str, usize>) -> String {
    let mut order: Vec<&str> = Vec::with_capacity(counts.len());
    if counts.contains_key("C") {
        order.push("C");
        if counts.contains_key("H") {
            order.push("H");
        }
    }
    let rest: Vec<&str> = counts
        .keys()
        .copied()
        .filter(|s| !order.contains(s))
        .collect();
    order.extend(rest);
    render(&order, counts)
}

pub fn alphabetical_formula(counts: &BTreeMap<&str, usize>) -> String {
    let order: Vec<&str> = counts.keys().copied().collect();
    render(&order, counts)
}

fn render(order: &[&str], counts: &BTreeMap<&str, usize>) -> String {
    let mut out = String::new();
    for symbol in order {
        out.push_str(symbol);
        match counts.get(symbol) {
            Some(&n) if n > 1 => out.push_str(&n.to_string()),
            _ => {}
        }
    }
    out
}
