use reqwest::Url;

use crate::entities::post_pk::PostPk;
use crate::error::{AppError, AppResult};

pub const POST_PK_PLACEHOLDER: &str = "num";

/// Absolute like or unlike URL with a single `num` path segment standing in for the post pk.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EndpointTemplate {
    url: Url,
}

impl EndpointTemplate {
    pub fn parse(template: &str) -> AppResult<Self> {
        let invalid = || AppError::InvalidEndpointTemplate {
            template: template.to_string(),
        };
        let url = Url::parse(template).map_err(|_| invalid())?;
        let placeholders = url
            .path_segments()
            .ok_or_else(invalid)?
            .filter(|segment| *segment == POST_PK_PLACEHOLDER)
            .count();
        if placeholders != 1 {
            return Err(invalid());
        }
        Ok(Self { url })
    }

    pub fn as_str(&self) -> &str {
        self.url.as_str()
    }

    pub fn render(&self, post_pk: &PostPk) -> String {
        let post_pk = post_pk.to_string();
        let segments = match self.url.path_segments() {
            Some(segments) => segments
                .map(|segment| match segment {
                    POST_PK_PLACEHOLDER => post_pk.clone(),
                    _ => segment.to_string(),
                })
                .collect::<Vec<String>>(),
            None => return self.url.to_string(),
        };

        let mut url = self.url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.clear().extend(segments);
        }
        url.to_string()
    }
}

/// Where the next click goes, depending on the confirmed like state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LikeEndpoints {
    pub like: EndpointTemplate,
    pub unlike: EndpointTemplate,
}

impl LikeEndpoints {
    pub fn new(like: &str, unlike: &str) -> AppResult<Self> {
        Ok(Self {
            like: EndpointTemplate::parse(like)?,
            unlike: EndpointTemplate::parse(unlike)?,
        })
    }

    pub fn target_for(&self, liked: bool, post_pk: &PostPk) -> String {
        match liked {
            true => self.unlike.render(post_pk),
            false => self.like.render(post_pk),
        }
    }
}
