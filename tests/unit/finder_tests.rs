// Email and URL finder tests

use noticescan::finder::{find_emails, find_urls};

#[test]
fn test_urls_in_license_notice() {
    let text = "// You may obtain a copy of the License at\n\
                //\n\
                //     http://www.apache.org/licenses/LICENSE-2.0\n\
                // See <https://www.gnu.org/licenses/>.\n";
    let urls: Vec<_> = find_urls(text, true).into_iter().map(|c| c.value).collect();
    assert_eq!(
        urls,
        vec!["http://www.apache.org/licenses/LICENSE-2.0", "https://www.gnu.org/licenses/"]
    );
}

#[test]
fn test_html_escaped_url_is_cleaned() {
    let urls = find_urls("see http://acme.org/page&gt;here\n", true);
    assert_eq!(urls[0].value, "http://acme.org/page");
}

#[test]
fn test_schema_urls_are_junk() {
    let text = "xmlns:xsi=\"http://www.w3.org/2001/XMLSchema-instance\"\n";
    assert!(find_urls(text, true).is_empty());
}

#[test]
fn test_emails_in_author_lines() {
    let text = " * @author Jane Roe <jane.roe@acme-corp.com>\n * Maintainer: bugs@acme-corp.com\n";
    let emails: Vec<_> = find_emails(text, true).into_iter().map(|c| (c.value, c.line)).collect();
    assert_eq!(
        emails,
        vec![("jane.roe@acme-corp.com".to_string(), 1), ("bugs@acme-corp.com".to_string(), 2)]
    );
}
