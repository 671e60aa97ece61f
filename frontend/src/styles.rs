pub const SITE_STYLES: &str = r#"
body {
    margin: 0;
    background: #1a1a1a;
    color: #ffffff;
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
}

main {
    padding-top: 74px;
    min-height: 100vh;
}

a {
    color: #7EB2FF;
    text-decoration: none;
}

/* Navigation */
.top-nav {
    position: fixed;
    top: 0;
    left: 0;
    right: 0;
    z-index: 100;
    transition: background 0.3s ease, backdrop-filter 0.3s ease;
}

.top-nav.scrolled {
    background: rgba(26, 26, 26, 0.9);
    backdrop-filter: blur(10px);
    border-bottom: 1px solid rgba(30, 144, 255, 0.1);
}

.nav-content {
    max-width: 1200px;
    margin: 0 auto;
    padding: 1rem 2rem;
    display: flex;
    align-items: center;
    justify-content: space-between;
}

.nav-logo {
    font-size: 1.5rem;
    font-weight: 700;
    color: #fff;
    letter-spacing: 0.05em;
}

.nav-right {
    display: flex;
    align-items: center;
    gap: 1.5rem;
}

.nav-group {
    position: relative;
}

.nav-group-label {
    color: #ccc;
    cursor: default;
}

.nav-dropdown {
    display: none;
    position: absolute;
    top: 100%;
    left: 0;
    flex-direction: column;
    gap: 0.5rem;
    padding: 1rem;
    min-width: 200px;
    background: rgba(26, 26, 26, 0.95);
    border: 1px solid rgba(30, 144, 255, 0.15);
    border-radius: 12px;
}

.nav-group:hover .nav-dropdown {
    display: flex;
}

.nav-link {
    color: #ccc;
}

.nav-link:hover {
    color: #fff;
}

.nav-login-button {
    padding: 0.5rem 1.25rem;
    border-radius: 8px;
    background: linear-gradient(45deg, #1E90FF, #7EB2FF);
    color: #fff;
}

.burger-menu {
    display: none;
    flex-direction: column;
    gap: 4px;
    background: none;
    border: none;
    cursor: pointer;
}

.burger-menu span {
    width: 24px;
    height: 2px;
    background: #fff;
}

@media (max-width: 768px) {
    .burger-menu {
        display: flex;
    }
    .nav-right {
        display: none;
    }
    .nav-right.mobile-menu-open {
        display: flex;
        flex-direction: column;
        position: absolute;
        top: 100%;
        left: 0;
        right: 0;
        padding: 1.5rem;
        background: rgba(26, 26, 26, 0.97);
    }
    .nav-dropdown {
        display: flex;
        position: static;
        border: none;
        padding: 0.5rem 0 0 1rem;
    }
}

/* Reveal-on-view */
.reveal {
    opacity: 0;
    transform: translateY(32px);
    transition: opacity 0.7s ease-out, transform 0.7s ease-out;
}

.reveal.revealed {
    opacity: 1;
    transform: none;
}

@media (prefers-reduced-motion: reduce) {
    .reveal {
        opacity: 1;
        transform: none;
        transition: none;
    }
}

/* Hero */
.page-hero {
    position: relative;
    overflow: hidden;
    text-align: center;
    padding: 8rem 2rem 6rem;
}

.hero-glow {
    position: absolute;
    inset: -20% 10% auto;
    height: 600px;
    pointer-events: none;
    z-index: -1;
}

.hero-content {
    max-width: 820px;
    margin: 0 auto;
}

.eyebrow {
    text-transform: uppercase;
    letter-spacing: 0.2em;
    font-size: 0.85rem;
}

.page-hero h1 {
    font-size: 3.5rem;
    margin: 1rem 0 1.5rem;
    background: linear-gradient(45deg, #fff, var(--accent-to, #7EB2FF));
    -webkit-background-clip: text;
    -webkit-text-fill-color: transparent;
}

.hero-subtitle {
    font-size: 1.2rem;
    color: #999;
}

.hero-cta-group {
    display: flex;
    justify-content: center;
    align-items: center;
    gap: 1.5rem;
    margin-top: 2rem;
}

.hero-cta {
    display: inline-block;
    padding: 0.9rem 2rem;
    border: none;
    border-radius: 8px;
    background: linear-gradient(45deg, #1E90FF, #7EB2FF);
    color: #fff;
    font-size: 1rem;
    cursor: pointer;
    transition: transform 0.2s ease;
}

.hero-cta:hover {
    transform: translateY(-2px);
}

.hero-cta:disabled {
    opacity: 0.6;
    cursor: wait;
}

.faq-link {
    color: #7EB2FF;
}

/* Sections */
section {
    max-width: 1200px;
    margin: 0 auto;
    padding: 4rem 2rem;
}

.section-header {
    text-align: center;
    margin-bottom: 3rem;
}

.section-header h2 {
    font-size: 2.5rem;
    margin-bottom: 0.75rem;
}

.section-header p {
    color: #999;
}

.roles-count {
    text-align: center;
    color: #999;
    margin: -2rem 0 2rem;
}

/* Counters */
.metric-strip {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
    gap: 2rem;
    text-align: center;
}

.metric-value {
    font-size: 3rem;
    font-weight: 700;
    color: #7EB2FF;
    font-variant-numeric: tabular-nums;
}

.metric-label {
    color: #999;
}

/* Bento grid */
.bento-grid {
    display: grid;
    grid-template-columns: repeat(3, 1fr);
    grid-auto-rows: minmax(220px, auto);
    gap: 1.5rem;
}

.tile-wide {
    grid-column: span 2;
}

.tile-tall {
    grid-row: span 2;
}

@media (max-width: 900px) {
    .bento-grid {
        grid-template-columns: 1fr;
    }
    .tile-wide,
    .tile-tall {
        grid-column: auto;
        grid-row: auto;
    }
}

.bento-card {
    height: 100%;
    box-sizing: border-box;
    padding: 2rem;
    border-radius: 16px;
    border: 1px solid rgba(30, 144, 255, 0.1);
    background: rgba(255, 255, 255, 0.03);
    transition: transform 0.3s ease, border-color 0.3s ease;
}

.bento-card:hover {
    transform: translateY(-4px);
}

.bento-icon {
    width: 48px;
    height: 48px;
    border-radius: 12px;
    display: flex;
    align-items: center;
    justify-content: center;
}

.icon {
    width: 24px;
    height: 24px;
}

.bento-tags {
    list-style: none;
    padding: 0;
    display: flex;
    flex-wrap: wrap;
    gap: 0.5rem;
}

.bento-tags li {
    font-size: 0.8rem;
    padding: 0.2rem 0.6rem;
    border-radius: 999px;
    background: rgba(255, 255, 255, 0.06);
}

/* Link cards */
.link-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
    gap: 1.5rem;
}

.link-card {
    display: block;
    height: 100%;
    padding: 2rem;
    border-radius: 16px;
    border: 1px solid rgba(30, 144, 255, 0.1);
    background: rgba(255, 255, 255, 0.03);
    color: #fff;
}

.link-card p {
    color: #999;
}

/* Process */
.process-steps {
    list-style: none;
    padding: 0;
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
    gap: 2rem;
}

.step-number {
    font-size: 2rem;
    font-weight: 700;
    color: rgba(126, 178, 255, 0.4);
}

/* FAQ and jobs */
.faq-section {
    max-width: 800px;
}

.faq-collapse {
    display: block;
    margin: 0 auto 1.5rem;
    background: none;
    border: none;
    color: #7EB2FF;
    cursor: pointer;
}

.carousel-position {
    color: #999;
    font-size: 0.85rem;
    margin-left: 0.5rem;
}

.faq-item,
.job {
    margin-bottom: 1rem;
    border-radius: 12px;
    border: 1px solid rgba(30, 144, 255, 0.1);
    background: rgba(255, 255, 255, 0.03);
    overflow: hidden;
}

.faq-question,
.job-header {
    width: 100%;
    display: flex;
    justify-content: space-between;
    align-items: center;
    padding: 1.25rem 1.5rem;
    background: none;
    border: none;
    color: #fff;
    font-size: 1.05rem;
    text-align: left;
    cursor: pointer;
}

.toggle-icon {
    font-size: 1.5rem;
    color: #7EB2FF;
}

.faq-answer {
    max-height: 0;
    padding: 0 1.5rem;
    color: #bbb;
    transition: max-height 0.4s ease, padding 0.4s ease;
}

.faq-item.open .faq-answer {
    max-height: 600px;
    padding: 0 1.5rem 1.25rem;
}

.job-meta {
    color: #999;
    margin: 0.25rem 0 0;
    font-size: 0.9rem;
}

.job-details {
    padding: 0 1.5rem 1.5rem;
    color: #bbb;
}

/* Testimonials */
.testimonials {
    max-width: 820px;
    margin: 0 auto;
    padding: 4rem 2rem;
    text-align: center;
}

.testimonial blockquote {
    font-size: 1.5rem;
    line-height: 1.5;
    margin: 0 0 1.5rem;
    animation: fadeIn 0.5s ease-in-out;
}

.testimonial figcaption {
    display: flex;
    flex-direction: column;
    gap: 0.25rem;
    color: #999;
}

.carousel-controls {
    display: flex;
    justify-content: center;
    align-items: center;
    gap: 0.75rem;
    margin-top: 2rem;
}

.carousel-arrow {
    background: none;
    border: none;
    color: #7EB2FF;
    font-size: 1.75rem;
    cursor: pointer;
}

.carousel-dot {
    width: 10px;
    height: 10px;
    border-radius: 50%;
    border: none;
    background: rgba(255, 255, 255, 0.25);
    cursor: pointer;
}

.carousel-dot.active {
    background: #1E90FF;
}

@keyframes fadeIn {
    from { opacity: 0; }
    to { opacity: 1; }
}

/* Contact */
.contact-layout {
    display: grid;
    grid-template-columns: 2fr 1fr;
    gap: 3rem;
}

@media (max-width: 900px) {
    .contact-layout {
        grid-template-columns: 1fr;
    }
}

.contact-form {
    display: flex;
    flex-direction: column;
    gap: 1.25rem;
}

.contact-form label {
    display: flex;
    flex-direction: column;
    gap: 0.5rem;
    color: #ccc;
}

.contact-form input,
.contact-form textarea {
    padding: 0.8rem 1rem;
    border-radius: 8px;
    border: 1px solid rgba(30, 144, 255, 0.2);
    background: rgba(0, 0, 0, 0.3);
    color: #fff;
    font: inherit;
}

.optional {
    color: #777;
    font-size: 0.85rem;
}

.field-error,
.error-message {
    color: #FB7185;
    font-size: 0.9rem;
}

.contact-success {
    padding: 2rem;
    border-radius: 16px;
    border: 1px solid rgba(52, 211, 153, 0.3);
}

.contact-success .reference {
    color: #999;
    font-family: monospace;
}

.offices {
    list-style: none;
    padding: 0;
}

.offices li {
    display: flex;
    flex-direction: column;
    margin-bottom: 1rem;
    color: #999;
}

.offices strong {
    color: #fff;
}

/* Footer */
.footer-cta {
    text-align: center;
}

.footer-cta .subtitle {
    color: #999;
    margin-bottom: 2rem;
}

.site-footer {
    border-top: 1px solid rgba(30, 144, 255, 0.1);
    padding: 3rem 2rem 2rem;
    color: #999;
}

.footer-columns {
    max-width: 1200px;
    margin: 0 auto;
    display: grid;
    grid-template-columns: 2fr repeat(3, 1fr);
    gap: 2rem;
}

.footer-columns > div {
    display: flex;
    flex-direction: column;
    gap: 0.5rem;
}

.footer-columns a {
    color: #999;
}

.copyright {
    text-align: center;
    margin-top: 3rem;
    font-size: 0.85rem;
}

.not-found {
    text-align: center;
    padding: 8rem 2rem;
}

.not-found h1 {
    font-size: 6rem;
    margin: 0;
}
"#;
