pub fn remove_html(input: &str) -> Result<String, html_entities::DecodeError> {
    html_entities::decode_html_entities(input).map(|decoded| {
        // Replace <br> and closing paragraphs with newline
        let br_re = regex::Regex::new("<br\\s*/?>|</p>").unwrap();
        let decoded = br_re.replace_all(&decoded, "\n");

        // Remove all html tags
        let re = regex::Regex::new("<[^>]*>").unwrap();
        re.replace_all(&decoded, "").trim().to_string()
    })
}

pub fn slugify(input: &str) -> String {
    let re = regex::Regex::new("[^a-z0-9]+").unwrap();
    re.replace_all(&input.to_lowercase(), "-")
        .trim_matches('-')
        .to_string()
}
