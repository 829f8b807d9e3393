//! Word-boundary aware case conversion shared by method and class names.
//!
//! Spaces, underscores and hyphens separate words and are dropped. The first
//! letter of each word is uppercased and everything else is kept exactly as
//! written, so names that are already camel cased come through untouched.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Case {
    /// `get_user_info` -> `getUserInfo`
    Lower,
    /// `get_user_info` -> `GetUserInfo`
    Upper,
}

fn is_boundary(c: char) -> bool {
    matches!(c, ' ' | '_' | '-')
}

pub fn inflect(word: &str, case: Case) -> String {
    let mut result = String::with_capacity(word.len());
    let mut word_start = true;

    for c in word.chars() {
        if is_boundary(c) {
            word_start = true;
            continue;
        }

        if result.is_empty() && case == Case::Lower {
            result.push(c.to_ascii_lowercase());
        } else if word_start {
            result.push(c.to_ascii_uppercase());
        } else {
            result.push(c);
        }

        word_start = false;
    }

    result
}

pub fn camelize(word: &str) -> String {
    inflect(word, Case::Lower)
}

pub fn classify(word: &str) -> String {
    inflect(word, Case::Upper)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn camelize_splits_on_underscores_and_hyphens() {
        assert_eq!(camelize("get_user_info"), "getUserInfo");
        assert_eq!(camelize("get-user-info"), "getUserInfo");
        assert_eq!(camelize("get user info"), "getUserInfo");
    }

    #[test]
    fn camelize_keeps_existing_case_boundaries() {
        assert_eq!(camelize("getUserInfo"), "getUserInfo");
        assert_eq!(camelize("GetUserInfo"), "getUserInfo");
        assert_eq!(camelize("XMLParser"), "xMLParser");
    }

    #[test]
    fn classify_uppercases_every_word() {
        assert_eq!(classify("get_user_info"), "GetUserInfo");
        assert_eq!(classify("getUserInfo"), "GetUserInfo");
        assert_eq!(classify("add"), "Add");
    }

    #[test]
    fn leading_and_repeated_separators_are_dropped() {
        assert_eq!(classify("__get__user"), "GetUser");
        assert_eq!(camelize("_get_user"), "getUser");
        assert_eq!(camelize("-"), "");
        assert_eq!(classify(""), "");
    }

    #[test]
    fn digits_and_non_ascii_are_kept() {
        assert_eq!(classify("v2_request"), "V2Request");
        assert_eq!(camelize("über_größe"), "überGröße");
    }
}
