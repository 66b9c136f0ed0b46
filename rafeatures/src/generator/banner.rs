//! Shared preamble for generated headers: the advisory "autogenerated"
//! banner followed by the license comment block.

use chrono::{Local, NaiveDateTime};

pub const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

pub const LICENSE_HEADER: &str = "\
/*
 * Copyright 2010 Reef Angel / Roberto Imai
 *
 * Licensed under the Apache License, Version 2.0 (the \"License\");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 * http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an \"AS IS\" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */

";

/// Who generated the file, from which sketch, and when.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub sketch: String,
    pub generated_at: NaiveDateTime,
}

impl Banner {
    pub fn new(sketch: impl Into<String>, generated_at: NaiveDateTime) -> Self {
        Self {
            sketch: sketch.into(),
            generated_at,
        }
    }

    /// Banner stamped with the current local time.
    pub fn now(sketch: impl Into<String>) -> Self {
        Self::new(sketch, Local::now().naive_local())
    }

    pub fn render(&self) -> String {
        format!(
            "// Autogenerated file by RAFeatures v{}, created on {}\n// Sketch: {}\n",
            env!("CARGO_PKG_VERSION"),
            self.generated_at.format(TIMESTAMP_FORMAT),
            self.sketch
        )
    }
}

/// Banner, blank line, license block.
pub fn render_preamble(banner: &Banner) -> String {
    let mut out = banner.render();
    out.push('\n');
    out.push_str(LICENSE_HEADER);
    out
}
