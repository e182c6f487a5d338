use url::Url;

use crate::doc::PoemDocument;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShareTarget {
    X,
    WhatsApp,
}

/// Builds the share link for the target. Only the poem text and author travel
/// in the link; the title stays local.
pub fn share_url(target: ShareTarget, doc: &PoemDocument) -> anyhow::Result<Url> {
    let message = match target {
        ShareTarget::X => {
            let mut message = format!("\"{}\"", doc.text);
            if !doc.author.is_empty() {
                message.push_str(" ~ ");
                message.push_str(&doc.author);
            }
            message.push_str(" #poetry #poem");
            message
        }
        ShareTarget::WhatsApp => {
            let mut message = doc.text.clone();
            if !doc.author.is_empty() {
                message.push_str("\n~ ");
                message.push_str(&doc.author);
            }
            message
        }
    };

    let base = match target {
        ShareTarget::X => "https://twitter.com/intent/tweet",
        ShareTarget::WhatsApp => "https://api.whatsapp.com/send",
    };
    let mut url = Url::parse(base)?;
    url.query_pairs_mut().append_pair("text", &message);
    Ok(url)
}

/// Hands the share link to the OS opener. Fire-and-forget.
pub fn open_share(target: ShareTarget, doc: &PoemDocument) -> anyhow::Result<()> {
    let url = share_url(target, doc)?;
    open::that(url.as_str())?;
    Ok(())
}
