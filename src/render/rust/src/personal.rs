/* src/render/rust/src/personal.rs */

use std::fmt::Write;

use crate::escape::escape_html;
use crate::labels::LabelTable;
use crate::locale::Locale;
use crate::messages::{Msg, PLACEHOLDER_IMAGE};
use crate::model::{IconRef, PersonalInfo, SocialLink, WorkExperience, text_or};

/// Personal info with every placeholder filled.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedPersonalInfo {
  pub name: String,
  pub profile_picture_url: String,
  pub tagline: String,
  pub bio_short: String,
  pub bio_long: String,
  pub cta_button: String,
  pub about_title: String,
  pub skills_technical_title: String,
  pub skills_technical: Vec<String>,
  pub skills_software_title: String,
  pub skills_software: Vec<String>,
  pub experience_title: String,
  pub work_experience: Vec<WorkExperience>,
  pub contact_title: String,
  pub contact_message: String,
  pub contact_email_label: String,
  pub contact_email: String,
  pub contact_phone_label: String,
  pub phone_number: Option<String>,
  pub social_links: Vec<SocialLink>,
}

/// Locale-aware defaults applied to absent fields.
pub fn default_personal_info(locale: Locale) -> ResolvedPersonalInfo {
  let t = |vi: &str, en: &str| locale.pick(vi, en).to_string();
  ResolvedPersonalInfo {
    name: t("Tên Người Dùng", "User Name"),
    profile_picture_url: PLACEHOLDER_IMAGE.to_string(),
    tagline: t("Dòng giới thiệu", "Tagline"),
    bio_short: t("Tiểu sử ngắn", "Short bio"),
    bio_long: t("Thông tin chi tiết", "Detailed information"),
    cta_button: t("Xem Dự Án", "View Projects"),
    about_title: t("Về Tôi", "About Me"),
    skills_technical_title: t("Kỹ Năng Chuyên Môn", "Technical Skills"),
    skills_technical: Vec::new(),
    skills_software_title: t("Phần Mềm Thành Thạo", "Proficient Software"),
    skills_software: Vec::new(),
    experience_title: t("Kinh Nghiệm Làm Việc", "Work Experience"),
    work_experience: Vec::new(),
    contact_title: t("Liên Hệ", "Contact"),
    contact_message: t("Nếu bạn có bất kỳ câu hỏi nào, hãy liên hệ!", "Reach out for any questions!"),
    contact_email_label: "Email:".to_string(),
    contact_email: "email@example.com".to_string(),
    contact_phone_label: Msg::PhoneLabel.text(locale).to_string(),
    phone_number: None,
    social_links: Vec::new(),
  }
}

impl PersonalInfo {
  /// Merge this record over the locale defaults. Fields present in the record
  /// always win; the record itself is left untouched.
  pub fn resolve(&self, locale: Locale) -> ResolvedPersonalInfo {
    let d = default_personal_info(locale);
    let pick = |field: &Option<String>, default: String| field.clone().unwrap_or(default);
    let list = |field: &Option<Vec<String>>, default: Vec<String>| field.clone().unwrap_or(default);
    ResolvedPersonalInfo {
      name: pick(&self.name, d.name),
      profile_picture_url: pick(&self.profile_picture_url, d.profile_picture_url),
      tagline: pick(&self.tagline, d.tagline),
      bio_short: pick(&self.bio_short, d.bio_short),
      bio_long: pick(&self.bio_long, d.bio_long),
      cta_button: pick(&self.cta_button, d.cta_button),
      about_title: pick(&self.about_title, d.about_title),
      skills_technical_title: pick(&self.skills_technical_title, d.skills_technical_title),
      skills_technical: list(&self.skills_technical, d.skills_technical),
      skills_software_title: pick(&self.skills_software_title, d.skills_software_title),
      skills_software: list(&self.skills_software, d.skills_software),
      experience_title: pick(&self.experience_title, d.experience_title),
      work_experience: self.work_experience.clone().unwrap_or(d.work_experience),
      contact_title: pick(&self.contact_title, d.contact_title),
      contact_message: pick(&self.contact_message, d.contact_message),
      contact_email_label: pick(&self.contact_email_label, d.contact_email_label),
      contact_email: pick(&self.contact_email, d.contact_email),
      contact_phone_label: pick(&self.contact_phone_label, d.contact_phone_label),
      phone_number: self.phone_number.clone().filter(|p| !p.is_empty()),
      social_links: self.social_links.clone().unwrap_or(d.social_links),
    }
  }
}

/// Markup for the hero, about and contact regions plus footer text.
#[derive(Debug, Clone, PartialEq)]
pub struct PersonalInfoView {
  pub hero: String,
  pub about: String,
  pub contact: String,
  /// Plain text, not markup.
  pub footer_name: String,
  /// Image worth a `<link rel="preload">` hint.
  pub preload: Option<String>,
}

pub fn render_personal_info(
  info: &PersonalInfo,
  locale: Locale,
  labels: &LabelTable,
) -> PersonalInfoView {
  let data = info.resolve(locale);
  let footer_name = if data.name.is_empty() {
    labels.footer_name(locale).to_string()
  } else {
    data.name.clone()
  };
  let preload = Some(data.profile_picture_url.clone())
    .filter(|url| !url.is_empty() && url != PLACEHOLDER_IMAGE);

  PersonalInfoView {
    hero: render_hero(&data, locale),
    about: render_about(&data, locale),
    contact: render_contact(&data, locale),
    footer_name,
    preload,
  }
}

fn render_hero(data: &ResolvedPersonalInfo, locale: Locale) -> String {
  format!(
    concat!(
      r#"<div class="hero-content">"#,
      r#"<img src="{pic}" alt="{name}" id="profile-pic" fetchpriority="high" loading="lazy" onerror="this.src='{ph}'">"#,
      "<h1>{name}</h1>",
      r#"<ul class="social-links-contact">{links}</ul>"#,
      r#"<p id="hero-tagline">{tagline}</p>"#,
      r#"<p id="hero-bio-short">{bio}</p>"#,
      r##"<a href="#projects" class="cta-button">{cta}</a>"##,
      "</div>"
    ),
    pic = escape_html(&data.profile_picture_url),
    name = escape_html(&data.name),
    ph = PLACEHOLDER_IMAGE,
    links = render_social_links(&data.social_links, locale),
    tagline = escape_html(&data.tagline),
    bio = escape_html(&data.bio_short),
    cta = escape_html(&data.cta_button),
  )
}

fn render_social_links(links: &[SocialLink], locale: Locale) -> String {
  let mut out = String::new();
  for link in links {
    let platform = link.platform.as_deref().unwrap_or("Social");
    let icon = match link.icon() {
      IconRef::Image(src) => format!(
        r#"<img src="{}" alt="{} icon" class="social-icon-img" loading="lazy" onerror="this.src='{PLACEHOLDER_IMAGE}'">"#,
        escape_html(src),
        escape_html(platform),
      ),
      IconRef::Symbol(class) => format!(r#"<i class="{}"></i>"#, escape_html(class)),
    };
    let _ = write!(
      out,
      r#"<li><a href="{url}" target="_blank" rel="noopener" title="{platform}" aria-label="{aria} {platform}">{icon}</a></li>"#,
      url = escape_html(link.url.as_deref().unwrap_or("#")),
      platform = escape_html(platform),
      aria = Msg::SocialLinkTo.text(locale),
    );
  }
  out
}

fn render_list(items: &[String]) -> String {
  items.iter().map(|item| format!("<li>{}</li>", escape_html(item))).collect()
}

fn render_experience(items: &[WorkExperience], locale: Locale) -> String {
  let mut out = String::new();
  for exp in items {
    let company = text_or(&exp.company_name, Msg::Company.text(locale));
    let logo = match exp.company_logo_url.as_deref().filter(|u| !u.is_empty()) {
      Some(url) => format!(
        r#" <img src="{}" alt="{} logo" class="company-logo" loading="lazy" onerror="this.src='{PLACEHOLDER_IMAGE}'">"#,
        escape_html(url),
        escape_html(text_or(&exp.company_name, "company")),
      ),
      None => String::new(),
    };
    let _ = write!(
      out,
      concat!(
        r#"<div class="experience-item">"#,
        "<h4>{title}</h4>",
        r#"<p class="company">{company}{logo}</p>"#,
        r#"<p class="duration">{duration}</p>"#,
        "<ul>{duties}</ul>",
        "</div>"
      ),
      title = escape_html(text_or(&exp.job_title, Msg::Position.text(locale))),
      company = escape_html(company),
      logo = logo,
      duration = escape_html(exp.duration.as_deref().unwrap_or_default()),
      duties = render_list(&exp.responsibilities),
    );
  }
  out
}

fn render_about(data: &ResolvedPersonalInfo, locale: Locale) -> String {
  format!(
    concat!(
      r#"<div class="container">"#,
      "<h2>{about_title}</h2>",
      r#"<p id="bio-long">{bio_long}</p>"#,
      r#"<div class="skills-container"><h3>{tech_title}</h3><ul class="skills-list" id="technical-skills">{tech}</ul></div>"#,
      r#"<div class="skills-container"><h3>{soft_title}</h3><ul class="skills-list" id="software-skills">{soft}</ul></div>"#,
      r#"<div class="experience-container"><h3>{exp_title}</h3><div id="work-experience">{exp}</div></div>"#,
      "</div>"
    ),
    about_title = escape_html(&data.about_title),
    bio_long = escape_html(&data.bio_long),
    tech_title = escape_html(&data.skills_technical_title),
    tech = render_list(&data.skills_technical),
    soft_title = escape_html(&data.skills_software_title),
    soft = render_list(&data.skills_software),
    exp_title = escape_html(&data.experience_title),
    exp = render_experience(&data.work_experience, locale),
  )
}

fn render_contact(data: &ResolvedPersonalInfo, locale: Locale) -> String {
  let email = escape_html(&data.contact_email);
  let phone = match data.phone_number.as_deref() {
    Some(number) => format!(
      "<p><strong>{}</strong> <span>{}</span></p>",
      escape_html(&data.contact_phone_label),
      escape_html(number),
    ),
    None => String::new(),
  };
  format!(
    concat!(
      r#"<div class="container">"#,
      "<h2>{title}</h2>",
      r#"<div id="contact-info">"#,
      "<p>{message}</p>",
      r#"<p><strong>{email_label}</strong> <a href="mailto:{email}">{email}</a></p>"#,
      "{phone}",
      r#"<ul class="social-links-contact">{links}</ul>"#,
      "</div></div>"
    ),
    title = escape_html(&data.contact_title),
    message = escape_html(&data.contact_message),
    email_label = escape_html(&data.contact_email_label),
    email = email,
    phone = phone,
    links = render_social_links(&data.social_links, locale),
  )
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  fn parse(value: serde_json::Value) -> PersonalInfo {
    serde_json::from_value(value).unwrap()
  }

  #[test]
  fn defaults_fill_absent_fields_only() {
    let info = parse(json!({"name": "Lan", "tagline": ""}));
    let resolved = info.resolve(Locale::Secondary);
    assert_eq!(resolved.name, "Lan");
    // Present-but-empty is still present.
    assert_eq!(resolved.tagline, "");
    assert_eq!(resolved.bio_short, "Short bio");
    assert_eq!(resolved.about_title, "About Me");
  }

  #[test]
  fn defaults_follow_locale() {
    let resolved = PersonalInfo::default().resolve(Locale::Primary);
    assert_eq!(resolved.about_title, "Về Tôi");
    assert_eq!(resolved.profile_picture_url, PLACEHOLDER_IMAGE);
  }

  #[test]
  fn resolve_does_not_mutate_source() {
    let info = parse(json!({"name": "Lan"}));
    let before = info.clone();
    let _ = info.resolve(Locale::Primary);
    assert_eq!(info, before);
  }

  #[test]
  fn missing_social_links_render_nothing() {
    let view = render_personal_info(&parse(json!({"name": "Lan"})), Locale::Secondary, &LabelTable::default());
    assert!(view.hero.contains(r#"<ul class="social-links-contact"></ul>"#));
    assert!(view.contact.contains(r#"<ul class="social-links-contact"></ul>"#));
    assert!(!view.hero.contains("<li>"));
  }

  #[test]
  fn no_undefined_or_empty_placeholders() {
    let view = render_personal_info(&PersonalInfo::default(), Locale::Secondary, &LabelTable::default());
    for part in [&view.hero, &view.about, &view.contact] {
      assert!(!part.contains("undefined"));
      assert!(!part.contains("<h2></h2>"));
    }
    assert!(view.hero.contains("<h1>User Name</h1>"));
  }

  #[test]
  fn social_links_image_and_symbol() {
    let info = parse(json!({
      "social_links": [
        {"platform": "Behance", "url": "https://behance.net/x", "icon_class": "images/behance.svg"},
        {"platform": "GitHub", "url": "https://github.com/x", "icon_class": "fab fa-github"},
        {"platform": "Site"}
      ]
    }));
    let view = render_personal_info(&info, Locale::Secondary, &LabelTable::default());
    assert!(view.hero.contains(r#"<img src="images/behance.svg" alt="Behance icon""#));
    assert!(view.hero.contains(r#"<i class="fab fa-github"></i>"#));
    assert!(view.hero.contains(r##"<a href="#" target="_blank""##));
    assert!(view.hero.contains(r#"<i class="fa fa-link"></i>"#));
    assert_eq!(view.contact.matches("<li>").count(), 3);
  }

  #[test]
  fn work_experience_fallbacks_and_logo() {
    let info = parse(json!({
      "work_experience": [
        {"duration": "2020", "responsibilities": ["Design"]},
        {"job_title": "Lead", "company_name": "Acme", "company_logo_url": "acme.png"}
      ]
    }));
    let view = render_personal_info(&info, Locale::Primary, &LabelTable::default());
    assert!(view.about.contains("<h4>Chức vụ</h4>"));
    assert!(view.about.contains(r#"<p class="company">Công ty</p>"#));
    assert!(view.about.contains("<li>Design</li>"));
    assert!(view.about.contains(r#"alt="Acme logo""#));
  }

  #[test]
  fn empty_experience_fields_fall_back() {
    let info = parse(json!({
      "work_experience": [{"job_title": "", "company_name": "", "duration": "2021"}]
    }));
    let view = render_personal_info(&info, Locale::Secondary, &LabelTable::default());
    assert!(view.about.contains("<h4>Position</h4>"));
    assert!(view.about.contains(r#"<p class="company">Company</p>"#));
  }

  #[test]
  fn phone_row_only_when_present() {
    let without = render_personal_info(&PersonalInfo::default(), Locale::Secondary, &LabelTable::default());
    assert!(!without.contact.contains("Phone:"));
    let with = render_personal_info(
      &parse(json!({"phone_number": "+84 123"})),
      Locale::Secondary,
      &LabelTable::default(),
    );
    assert!(with.contact.contains("<strong>Phone:</strong> <span>+84 123</span>"));
  }

  #[test]
  fn fields_are_escaped() {
    let info = parse(json!({"name": "<script>x</script>", "contact_email": "a\"@b.c"}));
    let view = render_personal_info(&info, Locale::Secondary, &LabelTable::default());
    assert!(!view.hero.contains("<script>"));
    assert!(view.contact.contains("mailto:a&quot;@b.c"));
    // Footer is plain text; escaping is the document's job.
    assert_eq!(view.footer_name, "<script>x</script>");
  }

  #[test]
  fn preload_skips_placeholder() {
    let none = render_personal_info(&PersonalInfo::default(), Locale::Primary, &LabelTable::default());
    assert_eq!(none.preload, None);
    let some = render_personal_info(
      &parse(json!({"profile_picture_url": "images/me.jpg"})),
      Locale::Primary,
      &LabelTable::default(),
    );
    assert_eq!(some.preload.as_deref(), Some("images/me.jpg"));
  }

  #[test]
  fn empty_name_uses_footer_label() {
    let labels = LabelTable::capture([("footer_name", "Tên Nhà Thiết Kế")]);
    let view = render_personal_info(&parse(json!({"name": ""})), Locale::Primary, &labels);
    assert_eq!(view.footer_name, "Tên Nhà Thiết Kế");
  }
}
