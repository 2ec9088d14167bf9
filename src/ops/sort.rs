use std::cmp::Ordering;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use crate::model::item::Item;
use crate::model::view::SortOption;

/// Collation-style text ordering. Base letters compare first, ignoring case
/// and accents; then unaccented sorts before accented; then lowercase before
/// uppercase; raw code points break any remaining tie.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    base_key(a)
        .cmp(&base_key(b))
        .then_with(|| accent_key(a).cmp(&accent_key(b)))
        .then_with(|| case_cmp(a, b))
        .then_with(|| a.cmp(b))
}

/// Lowercased letters with combining marks stripped
fn base_key(s: &str) -> Vec<char> {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// The combining marks attached to each base character, in order
fn accent_key(s: &str) -> Vec<Vec<char>> {
    let mut key: Vec<Vec<char>> = Vec::new();
    for c in s.nfd() {
        if !is_combining_mark(c) {
            key.push(Vec::new());
        } else if let Some(marks) = key.last_mut() {
            marks.push(c);
        }
    }
    key
}

/// First position where the two differ only by case decides
fn case_cmp(a: &str, b: &str) -> Ordering {
    for (x, y) in a.chars().zip(b.chars()) {
        if x == y {
            continue;
        }
        match (x.is_lowercase(), y.is_lowercase()) {
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            _ => {}
        }
    }
    Ordering::Equal
}

/// Stable sort of a view by the given option
pub fn sort_items(items: &mut [&Item], option: SortOption) {
    match option {
        SortOption::AToZ => items.sort_by(|a, b| locale_cmp(&a.text, &b.text)),
        SortOption::ZToA => items.sort_by(|a, b| locale_cmp(&b.text, &a.text)),
        SortOption::Oldest => items.sort_by_key(|item| item.id),
        SortOption::Newest => items.sort_by(|a, b| b.id.cmp(&a.id)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::item::ItemId;
    use pretty_assertions::assert_eq;

    fn item(id: u64, text: &str) -> Item {
        Item::new(ItemId(id), text.to_string())
    }

    fn texts(items: &[&Item]) -> Vec<String> {
        items.iter().map(|i| i.text.clone()).collect()
    }

    #[test]
    fn test_locale_cmp_ignores_case_first() {
        assert_eq!(locale_cmp("apple", "Banana"), Ordering::Less);
        assert_eq!(locale_cmp("Zebra", "apple"), Ordering::Greater);
    }

    #[test]
    fn test_locale_cmp_lowercase_before_uppercase_on_tie() {
        assert_eq!(locale_cmp("a", "A"), Ordering::Less);
        assert_eq!(locale_cmp("Milk", "milk"), Ordering::Greater);
        assert_eq!(locale_cmp("milk", "milk"), Ordering::Equal);
    }

    #[test]
    fn test_locale_cmp_prefix_sorts_first() {
        assert_eq!(locale_cmp("Buy", "buy milk"), Ordering::Less);
    }

    #[test]
    fn test_sort_alphabetical() {
        let (a, b, c) = (item(1, "banana"), item(2, "Apple"), item(3, "cherry"));
        let mut view = vec![&a, &b, &c];
        sort_items(&mut view, SortOption::AToZ);
        assert_eq!(texts(&view), vec!["Apple", "banana", "cherry"]);
        sort_items(&mut view, SortOption::ZToA);
        assert_eq!(texts(&view), vec!["cherry", "banana", "Apple"]);
    }

    #[test]
    fn test_accented_letters_sort_with_their_base() {
        let (a, b, c) = (item(1, "zebra"), item(2, "\u{e9}clair"), item(3, "apple"));
        let mut view = vec![&a, &b, &c];
        sort_items(&mut view, SortOption::AToZ);
        assert_eq!(texts(&view), vec!["apple", "\u{e9}clair", "zebra"]);
        sort_items(&mut view, SortOption::ZToA);
        assert_eq!(texts(&view), vec!["zebra", "\u{e9}clair", "apple"]);
    }

    #[test]
    fn test_locale_cmp_accent_then_case_tie_breaks() {
        assert_eq!(locale_cmp("resume", "r\u{e9}sum\u{e9}"), Ordering::Less);
        assert_eq!(locale_cmp("r\u{e9}sum\u{e9}", "resumes"), Ordering::Less);
        assert_eq!(locale_cmp("r\u{e9}sum\u{e9}", "R\u{e9}sum\u{e9}"), Ordering::Less);
        assert_eq!(locale_cmp("\u{c9}cole", "ecoles"), Ordering::Less);
    }

    #[test]
    fn test_sort_by_age() {
        let (a, b, c) = (item(30, "x"), item(10, "y"), item(20, "z"));
        let mut view = vec![&a, &b, &c];
        sort_items(&mut view, SortOption::Oldest);
        assert_eq!(texts(&view), vec!["y", "z", "x"]);
        sort_items(&mut view, SortOption::Newest);
        assert_eq!(texts(&view), vec!["x", "z", "y"]);
    }

    #[test]
    fn test_alphabetical_sort_is_stable() {
        let (a, b) = (item(1, "same"), item(2, "same"));
        let mut view = vec![&a, &b];
        sort_items(&mut view, SortOption::AToZ);
        assert_eq!(view[0].id, ItemId(1));
        sort_items(&mut view, SortOption::ZToA);
        assert_eq!(view[0].id, ItemId(1));
    }
}
