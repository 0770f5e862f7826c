use crate::site::escape_html;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusinessInfo {
    pub name: &'static str,
    pub address: &'static str,
    pub hours: &'static str,
    pub attribution: &'static str,
    pub rights: &'static str,
}

pub const BUSINESS: BusinessInfo = BusinessInfo {
    name: "AKANKSHA",
    address: "Delhi, India.",
    hours: "Open: 05:00 PM - 12:00 AM",
    attribution: "Developed By Akanksha",
    rights: "All Rights Reserved.",
};

pub fn render_footer() -> String {
    render_business_footer(&BUSINESS)
}

pub fn render_business_footer(info: &BusinessInfo) -> String {
    format!(
        r#"<footer>
  <div class="container">
    <div class="banner">
      <div class="left">{name}</div>
      <div class="right">
        <p>{address}</p>
        <p>{hours}</p>
      </div>
    </div>
    <div class="banner">
      <div class="left">
        <p>{attribution}</p>
      </div>
      <div class="right">
        <p>{rights}</p>
      </div>
    </div>
  </div>
</footer>"#,
        name = escape_html(info.name),
        address = escape_html(info.address),
        hours = escape_html(info.hours),
        attribution = escape_html(info.attribution),
        rights = escape_html(info.rights),
    )
}
