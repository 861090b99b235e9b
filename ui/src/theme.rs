pub const GLOBAL_CSS: &str = r#"
:root {
  --green: #4a7c59;
  --green-dark: #3b6347;
  --green-soft: #eaf2eb;
  --sand: #f0ebe5;
  --text: #333333;
  --text-muted: #4b5563;
  --white: #ffffff;
  --shadow-card: 0 4px 12px rgba(0, 0, 0, 0.08);
  --shadow-card-hover: 0 10px 24px rgba(0, 0, 0, 0.12);
  --radius: 12px;
  --radius-pill: 999px;
  --font-body: "Poppins", system-ui, -apple-system, sans-serif;
  --transition: 300ms ease;
}

* { box-sizing: border-box; }
html { scroll-behavior: smooth; }
html, body {
  margin: 0;
  padding: 0;
  background: var(--white);
  color: var(--text);
  font-family: var(--font-body);
  line-height: 1.6;
  -webkit-font-smoothing: antialiased;
}

a { color: inherit; text-decoration: none; }
h1, h2, h3, h4 { margin: 0; line-height: 1.25; }
p { margin: 0; }
ul { margin: 0; padding: 0; list-style: none; }

.container { width: 100%; max-width: 1200px; margin: 0 auto; padding: 0 24px; }

.site-header {
  position: sticky;
  top: 0;
  z-index: 50;
  background: rgba(255, 255, 255, 0.8);
  backdrop-filter: blur(12px);
  box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
}
.site-nav { display: flex; justify-content: space-between; align-items: center; padding-top: 12px; padding-bottom: 12px; }
.brand { font-size: 1.5rem; font-weight: 700; color: var(--green); }
.nav-links { display: none; gap: 32px; }
.nav-link { position: relative; padding-bottom: 4px; transition: color var(--transition); }
.nav-link::after {
  content: "";
  position: absolute;
  left: 0;
  bottom: 0;
  width: 0;
  height: 2px;
  background: var(--green);
  transition: width var(--transition);
}
.nav-link:hover { color: var(--green); }
.nav-link:hover::after { width: 100%; }
.menu-button { display: inline-flex; padding: 8px; border: 0; background: transparent; cursor: pointer; color: var(--text); }
.menu-button svg { width: 24px; height: 24px; }
.mobile-menu { display: none; }
.mobile-menu.open { display: block; }
.mobile-link { display: block; padding: 8px 16px; font-size: 0.875rem; }
.mobile-link:hover { background: var(--green-soft); }

.hero {
  min-height: 60vh;
  display: flex;
  align-items: center;
  background-size: cover;
  background-position: center;
  color: var(--white);
  text-align: center;
}
.hero h1 { font-size: 2.25rem; font-weight: 700; margin-bottom: 16px; }
.hero p { font-size: 1.125rem; margin-bottom: 32px; }
.text-shadow { text-shadow: 2px 2px 4px rgba(0, 0, 0, 0.5); }

.button {
  display: inline-block;
  font-weight: 700;
  padding: 12px 32px;
  border-radius: var(--radius-pill);
  transition: background var(--transition);
}
.button-primary { background: var(--green); color: var(--white); }
.button-primary:hover { background: var(--green-dark); }
.button-light { background: var(--white); color: var(--green); }
.button-light:hover { background: #e5e7eb; }

.section { padding: 64px 0; }
.section-sand { background: var(--sand); }
.section-head { text-align: center; margin-bottom: 48px; }
.section-title { font-size: 1.875rem; font-weight: 700; color: var(--green); }
.section-lead { margin: 16px auto 0; max-width: 48rem; font-size: 1.125rem; }

.grid { display: grid; gap: 32px; }
.grid-3, .grid-4, .grid-2, .grid-5 { grid-template-columns: 1fr; }
.align-center { align-items: center; }
.align-start { align-items: start; }
.text-center { text-align: center; }

.card {
  background: var(--white);
  border-radius: var(--radius);
  box-shadow: var(--shadow-card);
  padding: 32px;
  transition: transform var(--transition), box-shadow var(--transition);
}
.card:hover { transform: translateY(-4px); box-shadow: var(--shadow-card-hover); }
.card-icon { font-size: 2.25rem; margin-bottom: 16px; }
.card h3 { font-size: 1.25rem; font-weight: 700; margin-bottom: 8px; }

.stat-value { font-size: 3rem; font-weight: 700; color: var(--green); }
.stat-caption { margin-top: 8px; font-size: 1.25rem; }
.stats { margin-bottom: 64px; }

.subheading { font-size: 1.5rem; font-weight: 700; margin-bottom: 16px; }
.checklist li { display: flex; align-items: center; margin-bottom: 8px; }
.check { color: #16a34a; margin-right: 8px; }
.bullets { list-style: disc inside; }
.bullets li { margin-bottom: 4px; }

.chart-container {
  position: relative;
  width: 100%;
  max-width: 500px;
  height: 300px;
  max-height: 350px;
  margin: 0 auto;
}
.chart-container canvas { display: block; width: 100% !important; height: 100% !important; }

.tech-component { padding: 24px; border-radius: 8px; }
.tech-icon { font-size: 3rem; margin-bottom: 16px; transition: color var(--transition); }
.tech-detail { max-height: 0; overflow: hidden; opacity: 0; transition: max-height 500ms ease, opacity 500ms ease; }
.tech-card:hover .tech-detail { max-height: 240px; opacity: 1; }

.figure { display: flex; flex-direction: column; align-items: center; margin-top: 32px; }
.figure img { width: 100%; max-width: 24rem; border-radius: 8px; box-shadow: var(--shadow-card); }

.step { padding: 16px; border-radius: 8px; transition: background var(--transition); }
.step:hover { background: #f3f4f6; }
.step h4 { font-weight: 700; }
.step p { font-size: 0.875rem; }
.steps > * + * { margin-top: 16px; }

.site-footer { background: var(--sand); padding: 32px 0; text-align: center; color: var(--text-muted); }
.site-footer .small { font-size: 0.875rem; margin-top: 8px; }
.social { display: flex; justify-content: center; align-items: center; gap: 16px; margin-top: 16px; }
.social svg { transition: transform var(--transition); }
.social a:hover svg { transform: scale(1.1); }

@media (min-width: 768px) {
  .nav-links { display: flex; }
  .menu-button, .mobile-menu, .mobile-menu.open { display: none; }
  .hero h1 { font-size: 3.75rem; }
  .hero p { font-size: 1.5rem; }
  .section { padding: 96px 0; }
  .section-title { font-size: 2.25rem; }
  .grid-2 { grid-template-columns: repeat(2, 1fr); }
  .grid-3 { grid-template-columns: repeat(3, 1fr); }
  .grid-4 { grid-template-columns: repeat(2, 1fr); }
  .grid-5 { grid-template-columns: repeat(5, 1fr); }
  .span-2 { grid-column: span 2; }
  .span-3 { grid-column: span 3; }
}

@media (min-width: 1024px) {
  .grid-4 { grid-template-columns: repeat(4, 1fr); }
}
"#;
