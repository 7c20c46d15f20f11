use crate::Error;
use bytes::Bytes;
use reqwest::multipart::{Form, Part};
use reqwest::Body;

/// A file destined for one of the multipart upload endpoints.
#[derive(Debug)]
pub struct Upload {
    stream: Body,
    filename: String,
    content_type: String,
    content_length: u64,
}

impl Upload {
    /// Creates an `Upload` from a buffer.
    ///
    /// # Panics
    ///
    /// Panics if the length of `content` overflows a [`u64`].
    pub fn new(content: impl Into<Bytes>, filename: String, content_type: String) -> Upload {
        let content: Bytes = content.into();
        Upload {
            content_length: content.len().try_into().unwrap(),
            stream: content.into(),
            filename,
            content_type,
        }
    }

    /// Creates an `Upload` streamed from a file on disk.
    #[cfg(feature = "fs")]
    pub async fn new_from_file(
        path: impl AsRef<std::path::Path>,
        content_type: String,
    ) -> Result<Upload, std::io::Error> {
        use tokio::fs::File;
        use tokio_util::codec::{BytesCodec, FramedRead};

        let filename = path
            .as_ref()
            .file_name()
            .and_then(std::ffi::OsStr::to_str)
            .unwrap_or("file")
            .to_owned();

        let file = File::open(path).await?;
        let content_length = file.metadata().await?.len();
        let stream = Body::wrap_stream(FramedRead::new(file, BytesCodec::new()));

        Ok(Upload {
            stream,
            filename,
            content_type,
            content_length,
        })
    }

    /// The form the profile endpoints expect: a single part named
    /// `upload` carrying the file.
    pub(crate) fn into_form(self) -> Result<Form, Error> {
        let part = Part::stream_with_length(self.stream, self.content_length)
            .file_name(self.filename)
            .mime_str(&self.content_type)?;
        Ok(Form::new().part("upload", part))
    }
}
