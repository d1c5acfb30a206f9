//! Track Options
//!
//! Which specialization tracks a student may pick, derived from the major
//! name. Whitespace in the major is ignored when matching.

pub fn track_options(major: &str) -> &'static [&'static str] {
    let major: String = major.chars().filter(|c| !c.is_whitespace()).collect();

    if major.contains("글로벌SW융합전공") || major.contains("글로벌소프트웨어융합전공") {
        &["다중전공트랙", "해외복수학위트랙", "학-석사연계트랙"]
    } else if major.contains("심화컴퓨팅전공") {
        &["심화컴퓨팅전공트랙", "다중전공트랙"]
    } else if major.contains("인공지능컴퓨팅전공") {
        &["인공지능트랙", "다중전공트랙"]
    } else {
        &["일반과정", "심화과정"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_sw_major() {
        let options = track_options("글로벌소프트웨어융합전공");
        assert_eq!(options.len(), 3);
        assert!(options.contains(&"해외복수학위트랙"));
        // Spaces in the major name do not matter
        assert_eq!(track_options("글로벌 소프트웨어 융합전공"), options);
    }

    #[test]
    fn test_advanced_computing_major() {
        assert_eq!(
            track_options("심화컴퓨팅전공"),
            &["심화컴퓨팅전공트랙", "다중전공트랙"]
        );
    }

    #[test]
    fn test_ai_computing_major() {
        assert_eq!(
            track_options("인공지능컴퓨팅전공"),
            &["인공지능트랙", "다중전공트랙"]
        );
    }

    #[test]
    fn test_unknown_major_falls_back() {
        assert_eq!(track_options("전자공학부"), &["일반과정", "심화과정"]);
    }
}
