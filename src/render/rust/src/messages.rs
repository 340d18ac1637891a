/* src/render/rust/src/messages.rs */

use crate::locale::Locale;

pub const PLACEHOLDER_IMAGE: &str = "images/placeholder.jpg";
pub const SPINNER_HTML: &str = r#"<div class="spinner"></div>"#;

/// Built-in localized strings used by renderers when content omits a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Msg {
  PersonalInfoError,
  ProjectsError,
  ProjectName,
  ProjectCategory,
  ProjectSummary,
  VideoProjectName,
  VideoCategory,
  VideoSummary,
  Position,
  Company,
  PhoneLabel,
  SocialLinkTo,
  CategoryLabel,
  DateLabel,
  ClientLabel,
  ToolsLabel,
  ViewLive,
  ViewLiveAria,
  CaseStudy,
  CaseStudyAria,
  MediaTitle,
  DetailedDescription,
  VideoLoading,
  VideoBlocked,
  ViewOnYouTube,
  ViewOnYouTubeAria,
  MediaVideoBlocked,
  ViewVideo,
  PlayVideo,
  DocumentTitle,
}

impl Msg {
  pub fn text(self, locale: Locale) -> &'static str {
    let (vi, en) = match self {
      Self::PersonalInfoError => (
        "Lỗi tải thông tin cá nhân. Vui lòng thử lại sau.",
        "Error loading personal information. Please try again later.",
      ),
      Self::ProjectsError => ("Lỗi tải danh sách dự án.", "Error loading project list."),
      Self::ProjectName => ("Tên Dự Án", "Project Name"),
      Self::ProjectCategory => ("Thể loại", "Category"),
      Self::ProjectSummary => ("Tóm tắt dự án", "Project summary"),
      Self::VideoProjectName => ("Tên Dự Án Video", "Video Project Name"),
      Self::VideoCategory => ("Thể loại Video", "Video Category"),
      Self::VideoSummary => ("Tóm tắt dự án video", "Video project summary"),
      Self::Position => ("Chức vụ", "Position"),
      Self::Company => ("Công ty", "Company"),
      Self::PhoneLabel => ("Điện thoại:", "Phone:"),
      Self::SocialLinkTo => ("Liên kết tới", "Link to"),
      Self::CategoryLabel => ("Thể loại:", "Category:"),
      Self::DateLabel => ("Ngày:", "Date:"),
      Self::ClientLabel => ("Khách hàng:", "Client:"),
      Self::ToolsLabel => ("Công cụ sử dụng:", "Tools Used:"),
      Self::ViewLive => ("Xem trực tiếp", "View Live"),
      Self::ViewLiveAria => ("Xem dự án trực tiếp", "View the live project"),
      Self::CaseStudy => ("Xem Case Study", "View Case Study"),
      Self::CaseStudyAria => ("Xem case study", "View the case study"),
      Self::MediaTitle => ("Hình Ảnh/Video Dự Án", "Project Images/Videos"),
      Self::DetailedDescription => ("Mô tả chi tiết", "Detailed description"),
      Self::VideoLoading => ("Đang tải video...", "Loading video..."),
      Self::VideoBlocked => (
        "Video không thể load do bị chặn. Vui lòng xem trực tiếp trên YouTube.",
        "Video cannot be loaded due to restrictions. Please view it directly on YouTube.",
      ),
      Self::ViewOnYouTube => ("Xem trên YouTube", "View on YouTube"),
      Self::ViewOnYouTubeAria => ("Xem video trên YouTube", "Watch the video on YouTube"),
      Self::MediaVideoBlocked => (
        "Video không thể load. Vui lòng xem trực tiếp.",
        "Video cannot be loaded. Please view it directly.",
      ),
      Self::ViewVideo => ("Xem video", "View video"),
      Self::PlayVideo => ("Phát video", "Play video"),
      Self::DocumentTitle => ("Portfolio Thiết Kế", "Design Portfolio"),
    };
    locale.pick(vi, en)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn both_locales_differ_for_errors() {
    assert_ne!(
      Msg::ProjectsError.text(Locale::Primary),
      Msg::ProjectsError.text(Locale::Secondary)
    );
  }

  #[test]
  fn document_title() {
    assert_eq!(Msg::DocumentTitle.text(Locale::Primary), "Portfolio Thiết Kế");
    assert_eq!(Msg::DocumentTitle.text(Locale::Secondary), "Design Portfolio");
  }
}
