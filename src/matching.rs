//! Digest-to-target comparison.

/// A candidate whose digest equals a target hash
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashMatch {
    pub candidate: String,
    pub target: String,
}

/// Compare every computed digest against every target hash.
///
/// The scan is deliberately exhaustive (no early exit, no set indexing, no
/// deduplication): a candidate matching two targets, or a target listed
/// twice, yields one record per pairing. `computed` and `words` are
/// index-aligned; results follow candidate order, then target order.
pub fn find_matches(computed: &[String], targets: &[String], words: &[String]) -> Vec<HashMatch> {
    let mut matches = Vec::new();
    for (digest, word) in computed.iter().zip(words) {
        for target in targets {
            if digest.eq_ignore_ascii_case(target) {
                matches.push(HashMatch {
                    candidate: word.clone(),
                    target: target.clone(),
                });
            }
        }
    }
    matches
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hashing::{hash_wordlist, Algorithm};

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_single_match() {
        let words = strings(&["password", "admin123"]);
        let (digests, _) = hash_wordlist(&words, Algorithm::Sha256);
        let targets = vec![crate::hashing::hash_candidate("admin123", Algorithm::Sha256)];

        let matches = find_matches(&digests, &targets, &words);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].candidate, "admin123");
        assert_eq!(matches[0].target, targets[0]);
    }

    #[test]
    fn test_case_insensitive_target() {
        let words = strings(&["password"]);
        let (digests, _) = hash_wordlist(&words, Algorithm::Md5);
        let targets = strings(&["5F4DCC3B5AA765D61D8327DEB882CF99"]);

        let matches = find_matches(&digests, &targets, &words);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].target, "5F4DCC3B5AA765D61D8327DEB882CF99");
    }

    #[test]
    fn test_empty_targets_yield_no_matches() {
        let words = strings(&["password", "admin123", "letmein"]);
        let (digests, _) = hash_wordlist(&words, Algorithm::Sha256);

        let matches = find_matches(&digests, &[], &words);
        assert!(matches.is_empty());
    }

    #[test]
    fn test_wrong_hash_yields_no_match() {
        // md5("abc") is 900150983cd24fb0d6963f7d28e17f72, which does not
        // equal the target below.
        let words = strings(&["abc"]);
        let (digests, _) = hash_wordlist(&words, Algorithm::Md5);
        let targets = strings(&["0800fc577294c34e0b28ad2839435945"]);

        let matches = find_matches(&digests, &targets, &words);
        assert!(matches.is_empty());
    }

    #[test]
    fn test_duplicate_target_reported_twice() {
        let words = strings(&["password"]);
        let (digests, _) = hash_wordlist(&words, Algorithm::Md5);
        let target = "5f4dcc3b5aa765d61d8327deb882cf99".to_string();
        let targets = vec![target.clone(), target];

        let matches = find_matches(&digests, &targets, &words);
        assert_eq!(matches.len(), 2);
    }

    #[test]
    fn test_result_order_follows_candidates_then_targets() {
        let words = strings(&["admin123", "password"]);
        let (digests, _) = hash_wordlist(&words, Algorithm::Md5);
        let targets = vec![
            crate::hashing::hash_candidate("password", Algorithm::Md5),
            crate::hashing::hash_candidate("admin123", Algorithm::Md5),
        ];

        let matches = find_matches(&digests, &targets, &words);
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].candidate, "admin123");
        assert_eq!(matches[1].candidate, "password");
    }
}
