use crate::git_utils;

/// Handle `tgit open`: open the repository page in the default browser.
pub fn handle_open(remote: &str) -> Result<(), Box<dyn std::error::Error>> {
    let url = git_utils::remote_url(remote)?;
    let web = git_utils::web_url(&url)?;

    println!("opening {}", web);
    git_utils::open_in_browser(&web)?;
    Ok(())
}
