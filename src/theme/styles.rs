//! Global CSS styles for the portfolio.
//!
//! Light theme on `:root`, dark overrides on `:root.dark`. Accent shades come
//! from [`super::palette_css`].

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* SURFACES */
  --bg: #f8fafc;
  --bg-elevated: #ffffff;
  --bg-muted: #f1f5f9;
  --border: #e2e8f0;
  --overlay: rgba(248, 250, 252, 0.8);

  /* TEXT */
  --text-primary: #0f172a;
  --text-secondary: #475569;
  --text-muted: #94a3b8;

  /* BRAND */
  --brand-from: #2563eb;
  --brand-to: #e11d48;
  --success: #059669;
  --danger: #e11d48;

  /* Typography */
  --font-sans: 'Inter', system-ui, -apple-system, 'Segoe UI', sans-serif;
  --font-mono: 'JetBrains Mono', 'SF Mono', 'Consolas', monospace;

  /* Type Scale */
  --text-xs: 0.75rem;
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.125rem;
  --text-xl: 1.5rem;
  --text-2xl: 2rem;
  --text-3xl: 3rem;
  --text-4xl: 4.5rem;

  /* Shape */
  --radius-sm: 0.5rem;
  --radius: 1rem;
  --radius-lg: 1.75rem;
  --shadow: 0 10px 30px -12px rgba(15, 23, 42, 0.15);

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
  --transition-slow: 700ms cubic-bezier(0.4, 0, 0.2, 1);
}

:root.dark {
  --bg: #020617;
  --bg-elevated: #0f172a;
  --bg-muted: #1e293b;
  --border: #1e293b;
  --overlay: rgba(2, 6, 23, 0.8);

  --text-primary: #f8fafc;
  --text-secondary: #cbd5e1;
  --text-muted: #64748b;

  --brand-from: #60a5fa;
  --brand-to: #fb7185;
  --success: #34d399;
  --danger: #fb7185;

  --shadow: 0 10px 30px -12px rgba(0, 0, 0, 0.6);
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  scroll-behavior: smooth;
  -webkit-font-smoothing: antialiased;
  -moz-osx-font-smoothing: grayscale;
}

body {
  font-family: var(--font-sans);
  background: var(--bg);
  color: var(--text-primary);
  line-height: 1.6;
  min-height: 100vh;
  transition: background var(--transition-normal), color var(--transition-normal);
}

a {
  color: inherit;
  text-decoration: none;
}

img {
  max-width: 100%;
  display: block;
}

.icon {
  flex-shrink: 0;
}

.page {
  overflow-x: hidden;
}

.container {
  width: 100%;
  max-width: 80rem;
  margin: 0 auto;
  padding: 0 1.5rem;
}

/* === Typography === */
.gradient-text {
  background: linear-gradient(90deg, var(--brand-from), var(--brand-to));
  -webkit-background-clip: text;
  background-clip: text;
  color: transparent;
}

.mono-label {
  font-family: var(--font-mono);
  font-size: var(--text-xs);
  color: var(--text-muted);
}

.accent-text {
  color: var(--accent);
  font-weight: 600;
}

.highlight {
  color: var(--accent);
  font-weight: 700;
}

/* === Buttons === */
.btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  gap: 0.5rem;
  padding: 0.85rem 1.75rem;
  border-radius: 999px;
  border: 1px solid transparent;
  font-family: inherit;
  font-size: var(--text-sm);
  font-weight: 600;
  cursor: pointer;
  transition: transform var(--transition-fast), background var(--transition-fast),
    border-color var(--transition-fast);
}

.btn:hover:not(:disabled) {
  transform: translateY(-2px);
}

.btn:disabled {
  opacity: 0.6;
  cursor: not-allowed;
}

.btn-primary {
  background: var(--text-primary);
  color: var(--bg);
}

.btn-ghost {
  background: transparent;
  border-color: var(--border);
  color: var(--text-primary);
}

.btn-ghost:hover {
  border-color: var(--text-muted);
}

.btn-block {
  width: 100%;
}

.btn-icon-slide {
  transition: transform var(--transition-fast);
}

.btn:hover .btn-icon-slide {
  transform: translateX(4px);
}

/* === Navbar === */
.navbar {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  z-index: 50;
  padding: 1.25rem 0;
  transition: background var(--transition-normal), padding var(--transition-normal),
    border-color var(--transition-normal);
  border-bottom: 1px solid transparent;
}

.navbar--transparent {
  background: transparent;
}

.navbar--glass {
  background: var(--overlay);
  backdrop-filter: blur(12px);
  -webkit-backdrop-filter: blur(12px);
  border-bottom-color: var(--border);
  padding: 0.75rem 0;
}

.navbar--solid {
  background: var(--bg);
}

.navbar-inner {
  display: flex;
  align-items: center;
  justify-content: space-between;
}

.navbar-logo {
  font-size: var(--text-xl);
  font-weight: 800;
  letter-spacing: -0.03em;
  position: relative;
  z-index: 60;
}

.navbar-links {
  display: flex;
  gap: 2rem;
}

.navbar-link {
  font-size: var(--text-sm);
  font-weight: 500;
  color: var(--text-secondary);
  transition: color var(--transition-fast);
}

.navbar-link:hover {
  color: var(--text-primary);
}

.navbar-actions {
  display: flex;
  align-items: center;
  gap: 0.75rem;
  position: relative;
  z-index: 60;
}

.theme-toggle,
.menu-toggle {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  width: 2.5rem;
  height: 2.5rem;
  border-radius: 999px;
  border: 1px solid var(--border);
  background: var(--bg-elevated);
  color: var(--text-secondary);
  cursor: pointer;
  transition: transform var(--transition-fast), color var(--transition-fast);
}

.theme-toggle:hover {
  transform: rotate(15deg);
  color: var(--text-primary);
}

.theme-toggle--dark {
  color: var(--accent-yellow);
}

.menu-toggle {
  display: none;
}

.menu-icon--close {
  animation: spin-in 300ms ease;
}

/* === Mobile Menu === */
.mobile-menu {
  position: fixed;
  inset: 0;
  z-index: 55;
  background: var(--bg);
  display: flex;
  align-items: center;
  justify-content: center;
  animation: fade-in 300ms ease;
}

.mobile-menu-links {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 2rem;
}

.mobile-menu-link {
  font-size: var(--text-2xl);
  font-weight: 700;
  opacity: 0;
  animation: fade-up 400ms ease forwards;
}

/* === Hero === */
.hero {
  position: relative;
  min-height: 100vh;
  display: flex;
  align-items: center;
  padding: 8rem 0 5rem;
  overflow: hidden;
}

.hero-grid {
  position: absolute;
  inset: 0;
  background-image: linear-gradient(var(--border) 1px, transparent 1px),
    linear-gradient(90deg, var(--border) 1px, transparent 1px);
  background-size: 48px 48px;
  mask-image: radial-gradient(ellipse at center, black 30%, transparent 75%);
  -webkit-mask-image: radial-gradient(ellipse at center, black 30%, transparent 75%);
  opacity: 0.5;
}

.hero-orbs .orb {
  position: absolute;
  width: 28rem;
  height: 28rem;
  border-radius: 50%;
  filter: blur(90px);
  opacity: 0.25;
  animation: pulse 6s ease-in-out infinite;
}

.orb--blue {
  top: -6rem;
  left: -8rem;
  background: var(--accent-blue);
}

.orb--rose {
  bottom: -8rem;
  right: -6rem;
  background: var(--accent-rose);
  animation-delay: 2s;
}

.hero-layout {
  position: relative;
  display: grid;
  grid-template-columns: 1.1fr 0.9fr;
  gap: 4rem;
  align-items: center;
}

.hero-badge {
  display: inline-flex;
  align-items: center;
  gap: 0.5rem;
  padding: 0.35rem 0.9rem;
  border-radius: 999px;
  border: 1px solid var(--border);
  background: var(--bg-elevated);
  font-size: var(--text-xs);
  font-weight: 600;
  text-transform: uppercase;
  letter-spacing: 0.08em;
  color: var(--text-secondary);
}

.ping-dot {
  position: relative;
  width: 0.5rem;
  height: 0.5rem;
  border-radius: 50%;
  background: var(--success);
}

.ping-dot::after {
  content: '';
  position: absolute;
  inset: 0;
  border-radius: 50%;
  background: var(--success);
  animation: ping 1.5s cubic-bezier(0, 0, 0.2, 1) infinite;
}

.hero-title {
  margin: 1.5rem 0;
  font-size: var(--text-4xl);
  font-weight: 800;
  line-height: 1.05;
  letter-spacing: -0.04em;
}

.hero-subtext {
  max-width: 34rem;
  font-size: var(--text-lg);
  color: var(--text-secondary);
}

.hero-actions {
  display: flex;
  flex-wrap: wrap;
  gap: 1rem;
  margin-top: 2.5rem;
}

.hero-visual {
  position: relative;
}

.metrics-card {
  border-radius: var(--radius-lg);
  border: 1px solid var(--border);
  background: var(--bg-elevated);
  box-shadow: var(--shadow);
  overflow: hidden;
}

.metrics-card-header {
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 1rem 1.5rem;
  border-bottom: 1px solid var(--border);
}

.window-dots {
  display: flex;
  gap: 0.4rem;
}

.window-dots span {
  width: 0.65rem;
  height: 0.65rem;
  border-radius: 50%;
  background: var(--accent-rose);
}

.window-dots span + span {
  background: var(--accent-yellow);
}

.metrics-card-body {
  display: flex;
  flex-direction: column;
  gap: 1.25rem;
  padding: 1.5rem;
}

.bar-metric-labels {
  display: flex;
  justify-content: space-between;
  margin-bottom: 0.5rem;
  font-size: var(--text-sm);
  color: var(--text-secondary);
}

.bar-track {
  height: 0.5rem;
  border-radius: 999px;
  background: var(--bg-muted);
  overflow: hidden;
}

.bar-fill {
  height: 100%;
  border-radius: 999px;
  background: var(--accent);
}

.code-block {
  padding: 1rem;
  border-radius: var(--radius-sm);
  background: var(--bg-muted);
  font-family: var(--font-mono);
  font-size: var(--text-xs);
}

.code-line {
  font-family: inherit;
  white-space: pre;
  color: var(--text-secondary);
}

.code-line--comment {
  color: var(--text-muted);
}

.metrics-card-footer {
  display: flex;
  align-items: center;
  gap: 0.75rem;
  padding: 1rem 1.5rem;
  border-top: 1px solid var(--border);
}

.status-icon {
  display: flex;
  padding: 0.5rem;
  border-radius: var(--radius-sm);
  color: var(--success);
  background: var(--bg-muted);
}

.status-text {
  display: flex;
  flex-direction: column;
}

.status-title {
  font-size: var(--text-sm);
  font-weight: 700;
}

.status-caption {
  font-size: var(--text-xs);
  color: var(--text-muted);
}

.floating-chip {
  position: absolute;
  display: flex;
  padding: 0.9rem;
  border-radius: var(--radius);
  border: 1px solid var(--border);
  background: var(--bg-elevated);
  box-shadow: var(--shadow);
  animation: float 6s ease-in-out infinite;
}

.floating-chip--top {
  top: -1.5rem;
  right: -1.5rem;
  color: var(--accent-blue);
  animation-delay: 1s;
}

.floating-chip--bottom {
  bottom: -1.5rem;
  left: -1.5rem;
  color: var(--accent-emerald);
  animation-delay: 2s;
}

.scroll-indicator {
  position: absolute;
  bottom: 2rem;
  left: 50%;
  transform: translateX(-50%);
  width: 1.5rem;
  height: 2.5rem;
  border: 2px solid var(--text-muted);
  border-radius: 999px;
  display: flex;
  justify-content: center;
  padding-top: 0.4rem;
}

.scroll-indicator-dot {
  width: 0.25rem;
  height: 0.5rem;
  border-radius: 999px;
  background: var(--text-muted);
  animation: scroll-dot 1.8s ease-in-out infinite;
}

/* === Sections === */
.section {
  padding: 7rem 0;
}

.section--projects,
.section--certifications {
  background: var(--bg-muted);
}

.section-heading {
  margin-bottom: 3.5rem;
}

.section-title {
  font-size: var(--text-3xl);
  font-weight: 800;
  letter-spacing: -0.03em;
  line-height: 1.1;
}

.section-title--medium {
  font-size: var(--text-2xl);
}

.section-subtitle {
  margin-top: 1rem;
  max-width: 40rem;
  font-size: var(--text-lg);
  color: var(--text-secondary);
}

.separator {
  height: 1px;
  margin: 5rem 0;
  background: linear-gradient(90deg, transparent, var(--border), transparent);
}

/* === Cards === */
.card {
  border-radius: var(--radius-lg);
  border: 1px solid var(--border);
  background: var(--bg-elevated);
  padding: 2rem;
  transition: transform var(--transition-normal), box-shadow var(--transition-normal),
    border-color var(--transition-normal);
}

.card:hover {
  transform: translateY(-4px);
  box-shadow: var(--shadow);
}

.tag-list {
  display: flex;
  flex-wrap: wrap;
  gap: 0.5rem;
  margin-top: 1.5rem;
}

.tag {
  padding: 0.3rem 0.75rem;
  border-radius: 999px;
  background: var(--bg-muted);
  font-family: var(--font-mono);
  font-size: var(--text-xs);
  color: var(--text-secondary);
}

.gradient-tile {
  display: inline-flex;
  padding: 0.85rem;
  border-radius: var(--radius);
  color: #ffffff;
  background: linear-gradient(135deg, var(--from), var(--to));
}

/* === Experience === */
.experience-intro {
  margin-bottom: 1.5rem;
}

.pill-badge {
  display: inline-flex;
  align-items: center;
  gap: 0.4rem;
  padding: 0.35rem 0.9rem;
  border-radius: 999px;
  background: var(--bg-muted);
  font-size: var(--text-xs);
  font-weight: 700;
  text-transform: uppercase;
  letter-spacing: 0.08em;
  color: var(--accent-blue);
}

.experience-layout {
  display: grid;
  grid-template-columns: 1.4fr 1fr;
  gap: 2rem;
}

.experience-org {
  display: flex;
  align-items: center;
  gap: 1.25rem;
  margin-bottom: 1.75rem;
}

.org-logo {
  width: 4rem;
  height: 4rem;
  padding: 0.5rem;
  border-radius: var(--radius);
  background: #ffffff;
  border: 1px solid var(--border);
}

.org-name {
  font-size: var(--text-lg);
  font-weight: 700;
}

.org-role {
  font-size: var(--text-sm);
  color: var(--text-muted);
}

.experience-paragraph {
  color: var(--text-secondary);
  margin-bottom: 1rem;
}

.metric-grid {
  display: grid;
  grid-template-columns: repeat(2, 1fr);
  gap: 1rem;
}

.metric-tile {
  display: flex;
  flex-direction: column;
  justify-content: space-between;
  aspect-ratio: 1;
  padding: 1.5rem;
}

.metric-icon {
  display: inline-flex;
  width: fit-content;
  padding: 0.6rem;
  border-radius: var(--radius-sm);
  color: var(--accent);
  background: var(--bg-muted);
}

.metric-value {
  font-size: var(--text-2xl);
  font-weight: 800;
}

.metric-label {
  font-size: var(--text-xs);
  text-transform: uppercase;
  letter-spacing: 0.08em;
  color: var(--text-muted);
}

/* === Projects === */
.project-grid {
  display: grid;
  grid-template-columns: repeat(3, 1fr);
  gap: 1.5rem;
}

.project-card {
  position: relative;
  overflow: hidden;
}

.project-card--wide {
  grid-column: span 2;
}

.project-card-glow {
  position: absolute;
  top: -4rem;
  right: -4rem;
  width: 12rem;
  height: 12rem;
  border-radius: 50%;
  background: linear-gradient(135deg, var(--from), var(--to));
  filter: blur(60px);
  opacity: 0;
  transition: opacity var(--transition-normal);
}

.project-card:hover .project-card-glow {
  opacity: 0.25;
}

.project-card-header {
  position: relative;
  display: flex;
  justify-content: space-between;
  align-items: flex-start;
  margin-bottom: 1.5rem;
}

.project-card-arrow {
  color: var(--text-muted);
  transition: transform var(--transition-fast), color var(--transition-fast);
}

.project-card:hover .project-card-arrow {
  color: var(--text-primary);
  transform: translate(3px, -3px);
}

.project-title {
  position: relative;
  font-size: var(--text-xl);
  font-weight: 700;
  margin-bottom: 0.75rem;
}

.project-description {
  position: relative;
  color: var(--text-secondary);
}

.foundational-grid {
  display: grid;
  grid-template-columns: repeat(3, 1fr);
  gap: 1.5rem;
  margin-top: 1.5rem;
}

.foundational-card {
  padding: 1.5rem;
}

.foundational-header {
  display: flex;
  justify-content: space-between;
  align-items: center;
  margin-bottom: 1rem;
  color: var(--text-secondary);
}

.foundational-title {
  font-weight: 700;
  margin-bottom: 0.5rem;
}

.foundational-description {
  font-size: var(--text-sm);
  color: var(--text-secondary);
}

.achievement-grid {
  display: grid;
  grid-template-columns: repeat(3, 1fr);
  gap: 1.5rem;
}

.achievement-card {
  display: flex;
  gap: 1rem;
  padding: 1.5rem;
}

.achievement-icon {
  display: flex;
  height: fit-content;
  padding: 0.75rem;
  border-radius: var(--radius);
  color: var(--accent);
  background: var(--bg-muted);
}

.achievement-title {
  font-weight: 700;
  margin-bottom: 0.25rem;
}

.achievement-description {
  font-size: var(--text-sm);
  color: var(--text-secondary);
}

/* === Skills === */
.skill-grid {
  display: grid;
  grid-template-columns: repeat(3, 1fr);
  gap: 1.5rem;
}

.skill-card-header {
  display: flex;
  align-items: center;
  gap: 1rem;
  margin-bottom: 1rem;
}

.skill-icon {
  display: flex;
  padding: 0.75rem;
  border-radius: var(--radius);
  background: var(--bg-muted);
  color: var(--brand-from);
}

.skill-name {
  font-size: var(--text-lg);
  font-weight: 700;
}

.skill-description {
  font-size: var(--text-sm);
  color: var(--text-muted);
  margin-bottom: 1.5rem;
}

.skill-list {
  list-style: none;
  display: grid;
  grid-template-columns: repeat(2, 1fr);
  gap: 0.75rem;
}

.skill-item {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  font-size: var(--text-sm);
  color: var(--text-secondary);
}

.skill-item .icon {
  color: var(--success);
}

/* === Certifications === */
.cert-grid {
  display: grid;
  grid-template-columns: repeat(4, 1fr);
  gap: 1.5rem;
}

.cert-card {
  position: relative;
  display: flex;
  flex-direction: column;
  overflow: hidden;
  padding: 1.75rem;
}

.cert-bar {
  position: absolute;
  top: 0;
  left: 0;
  right: 0;
  height: 4px;
  background: linear-gradient(90deg, var(--from), var(--to));
}

.cert-title {
  margin-top: 1.25rem;
  font-size: var(--text-base);
  font-weight: 700;
  line-height: 1.3;
}

.cert-issuer {
  margin-top: 0.35rem;
  font-size: var(--text-sm);
  color: var(--text-muted);
}

.cert-footer {
  display: flex;
  align-items: center;
  justify-content: space-between;
  margin-top: auto;
  padding-top: 1.5rem;
  font-size: var(--text-xs);
}

.cert-date {
  display: inline-flex;
  align-items: center;
  gap: 0.35rem;
  color: var(--text-muted);
}

.cert-link {
  display: inline-flex;
  align-items: center;
  gap: 0.3rem;
  font-weight: 600;
  color: var(--text-primary);
}

.cert-link:hover {
  color: var(--brand-from);
}

/* === Footer & Contact === */
.footer {
  padding: 7rem 0 2.5rem;
  border-top: 1px solid var(--border);
}

.footer-layout {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 4rem;
}

.email-card {
  display: flex;
  align-items: center;
  gap: 1rem;
  padding: 1.25rem 1.5rem;
}

.email-card-icon {
  display: flex;
  padding: 0.75rem;
  border-radius: var(--radius);
  background: var(--bg-muted);
  color: var(--brand-from);
}

.email-card-label {
  display: block;
  font-size: var(--text-xs);
  text-transform: uppercase;
  letter-spacing: 0.08em;
  color: var(--text-muted);
}

.email-card-address {
  display: block;
  font-weight: 600;
}

.social-links {
  display: flex;
  flex-wrap: wrap;
  align-items: center;
  gap: 0.75rem;
  margin-top: 1.5rem;
}

.social-link {
  display: inline-flex;
  padding: 0.8rem;
  border-radius: 999px;
  border: 1px solid var(--border);
  color: var(--text-secondary);
  transition: color var(--transition-fast), border-color var(--transition-fast);
}

.social-link:hover {
  color: var(--text-primary);
  border-color: var(--text-muted);
}

.contact-form {
  display: flex;
  flex-direction: column;
  gap: 1.25rem;
}

.contact-form:hover {
  transform: none;
}

.form-row {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 1.25rem;
}

.form-field {
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
}

.form-field label {
  font-size: var(--text-xs);
  font-weight: 700;
  text-transform: uppercase;
  letter-spacing: 0.08em;
  color: var(--text-muted);
}

.form-field input,
.form-field textarea {
  width: 100%;
  padding: 0.85rem 1rem;
  border-radius: var(--radius-sm);
  border: 1px solid var(--border);
  background: var(--bg-muted);
  color: var(--text-primary);
  font-family: inherit;
  font-size: var(--text-base);
  resize: vertical;
  transition: border-color var(--transition-fast), box-shadow var(--transition-fast);
}

.form-field input:focus,
.form-field textarea:focus {
  outline: none;
  border-color: var(--brand-from);
  box-shadow: 0 0 0 3px rgba(37, 99, 235, 0.15);
}

.form-notice {
  font-size: var(--text-sm);
  text-align: center;
  animation: fade-in 300ms ease;
}

.form-notice--success {
  color: var(--success);
}

.form-notice--error {
  color: var(--danger);
}

.footer-bottom {
  display: flex;
  justify-content: space-between;
  flex-wrap: wrap;
  gap: 1rem;
  margin-top: 5rem;
  padding-top: 2rem;
  border-top: 1px solid var(--border);
  font-size: var(--text-sm);
  color: var(--text-muted);
}

/* === Motion === */
.fade-left {
  animation: fade-left 700ms ease both;
}

.fade-up {
  animation: fade-up 900ms ease both;
  animation-delay: 200ms;
}

.float {
  animation: float 6s ease-in-out infinite;
}

.reveal {
  opacity: 0;
  transform: translateY(24px);
  transition: opacity var(--transition-slow), transform var(--transition-slow);
}

.reveal.is-visible {
  opacity: 1;
  transform: none;
}

@keyframes float {
  0%, 100% { transform: translateY(0); }
  50% { transform: translateY(-12px); }
}

@keyframes pulse {
  0%, 100% { opacity: 0.2; }
  50% { opacity: 0.35; }
}

@keyframes ping {
  75%, 100% { transform: scale(2.2); opacity: 0; }
}

@keyframes fade-in {
  from { opacity: 0; }
  to { opacity: 1; }
}

@keyframes fade-up {
  from { opacity: 0; transform: translateY(20px); }
  to { opacity: 1; transform: none; }
}

@keyframes fade-left {
  from { opacity: 0; transform: translateX(-20px); }
  to { opacity: 1; transform: none; }
}

@keyframes spin-in {
  from { transform: rotate(-90deg); opacity: 0; }
  to { transform: none; opacity: 1; }
}

@keyframes scroll-dot {
  0% { transform: translateY(0); opacity: 1; }
  100% { transform: translateY(12px); opacity: 0; }
}

/* === Accessibility === */
@media (prefers-reduced-motion: reduce) {
  *, *::before, *::after {
    animation-duration: 0.01ms !important;
    animation-iteration-count: 1 !important;
    transition-duration: 0.01ms !important;
  }

  .reveal {
    opacity: 1;
    transform: none;
  }
}

/* === Responsive Layout for Narrow Windows === */
@media (max-width: 1024px) {
  .hero-layout,
  .experience-layout,
  .footer-layout {
    grid-template-columns: 1fr;
  }

  .cert-grid {
    grid-template-columns: repeat(2, 1fr);
  }

  .project-grid,
  .foundational-grid,
  .achievement-grid,
  .skill-grid {
    grid-template-columns: repeat(2, 1fr);
  }

  .project-card--wide {
    grid-column: span 2;
  }
}

@media (max-width: 768px) {
  :root {
    --text-4xl: 3rem;
    --text-3xl: 2.25rem;
  }

  .navbar-links {
    display: none;
  }

  .menu-toggle {
    display: inline-flex;
  }

  .hero-visual {
    display: none;
  }

  .project-grid,
  .foundational-grid,
  .achievement-grid,
  .skill-grid,
  .cert-grid,
  .form-row {
    grid-template-columns: 1fr;
  }

  .project-card--wide {
    grid-column: auto;
  }
}
"#;
