//! Global CSS styles for the medication record screen.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* BLUE (Header, Active, Badges) */
  --blue-50: #eff6ff;
  --blue-100: #dbeafe;
  --blue-500: #3b82f6;
  --blue-600: #2563eb;

  /* GRAY (Page, Borders, Text) */
  --gray-50: #f9fafb;
  --gray-100: #f3f4f6;
  --gray-200: #e5e7eb;
  --gray-500: #6b7280;
  --gray-600: #4b5563;
  --gray-700: #374151;
  --gray-900: #111827;

  /* SURFACE */
  --white: #ffffff;
  --white-90: rgba(255, 255, 255, 0.9);
  --white-75: rgba(255, 255, 255, 0.75);
  --white-20: rgba(255, 255, 255, 0.2);

  /* Typography */
  --font-sans: 'Hiragino Sans', 'Noto Sans JP', 'Yu Gothic', system-ui, sans-serif;

  /* Type Scale */
  --text-xs: 0.75rem;
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-2xl: 1.5rem;

  /* Radii */
  --radius-md: 10px;
  --radius-lg: 14px;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  font-family: var(--font-sans);
  background: var(--gray-50);
  color: var(--gray-900);
}

img {
  display: block;
}

button {
  font: inherit;
  border: none;
  background: none;
  cursor: pointer;
}

/* === Icons === */
.icon-xs { width: 12px; height: 12px; }
.icon-sm { width: 20px; height: 20px; }
.icon-md { width: 24px; height: 24px; }
.icon-lg { width: 28px; height: 28px; }

/* === Screen === */
.medication-app {
  width: 564px;
  min-height: 876px;
  margin: 0 auto;
  background: var(--gray-50);
}

/* === Header === */
.record-header {
  height: 12rem;
  padding: 1.5rem 1rem 0;
  background: linear-gradient(to right, var(--blue-500), var(--blue-600));
  box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
}

.record-header__inner {
  display: flex;
  flex-direction: column;
  gap: 1rem;
}

.record-header__top {
  display: flex;
  justify-content: space-between;
  align-items: center;
  height: 3rem;
}

.record-header__identity {
  display: flex;
  align-items: center;
  gap: 0.75rem;
}

.record-header__avatar {
  width: 3rem;
  height: 3rem;
  border-radius: 9999px;
  background: var(--white);
  display: flex;
  align-items: center;
  justify-content: center;
}

.record-header__names {
  display: flex;
  flex-direction: column;
}

.record-header__title {
  font-size: var(--text-sm);
  color: var(--white-90);
}

.record-header__patient {
  font-size: var(--text-xs);
  color: var(--white-75);
}

/* === Settings Button === */
.settings-btn {
  width: 3rem;
  height: 3rem;
  border-radius: 9999px;
  background: var(--white);
  box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
  display: flex;
  align-items: center;
  justify-content: center;
}

.settings-btn__layers {
  position: relative;
  width: 24px;
  height: 24px;
}

.settings-btn__layer {
  position: absolute;
  inset: 0;
}

/* === Summary Grid === */
.summary-panel {
  height: 5rem;
  padding: 1rem;
  border-radius: var(--radius-md);
  background: var(--white-20);
}

.summary-grid {
  display: grid;
  grid-template-columns: repeat(3, 1fr);
  gap: 1rem;
  height: 3rem;
}

.summary-cell {
  display: flex;
  flex-direction: column;
  text-align: center;
}

.summary-value {
  font-size: var(--text-2xl);
  color: var(--white);
}

.summary-label {
  font-size: var(--text-xs);
  color: var(--white-90);
}

/* === Tab Strip === */
.tab-strip {
  height: 59px;
  background: var(--white);
  border-bottom: 1px solid var(--gray-200);
}

.tab-strip__row {
  display: flex;
  height: 58px;
}

.tab {
  flex: 1;
  display: flex;
  align-items: center;
  justify-content: center;
  gap: 0.5rem;
  border-bottom: 2px solid transparent;
}

.tab__label {
  font-size: var(--text-base);
  color: var(--gray-500);
}

.tab.active {
  border-bottom-color: var(--blue-600);
}

.tab.active .tab__label {
  color: var(--blue-600);
}

/* === Medication List === */
.medication-list {
  display: flex;
  flex-direction: column;
  gap: 1rem;
  padding: 1rem;
}

/* === Medication Card === */
.medication-card {
  padding: 1rem;
  background: var(--white);
  border: 1px solid var(--gray-100);
  border-radius: var(--radius-lg);
  box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
}

.medication-card__body {
  display: flex;
  gap: 0.75rem;
  margin-bottom: 0.75rem;
}

.medication-card__icon {
  width: 3rem;
  height: 3rem;
  flex-shrink: 0;
  border-radius: var(--radius-md);
  background: var(--blue-100);
  display: flex;
  align-items: center;
  justify-content: center;
}

.medication-card__details {
  flex: 1;
  display: flex;
  flex-direction: column;
  gap: 0.25rem;
}

.medication-card__name {
  font-size: var(--text-base);
  font-weight: normal;
  color: var(--gray-900);
}

.medication-card__description {
  font-size: var(--text-sm);
  color: var(--gray-600);
}

.medication-card__meta {
  display: flex;
  gap: 0.75rem;
}

.meta-field {
  display: flex;
  align-items: center;
  gap: 0.25rem;
  font-size: var(--text-xs);
  color: var(--gray-500);
}

.medication-card__date {
  flex-shrink: 0;
  display: flex;
  flex-direction: column;
  gap: 0.25rem;
  text-align: right;
  font-size: var(--text-xs);
}

.medication-card__date-label {
  color: var(--gray-500);
}

.medication-card__date-value {
  color: var(--gray-700);
}

.medication-card__times {
  display: flex;
  gap: 0.5rem;
  padding-top: 0.75rem;
  border-top: 1px solid var(--gray-100);
}

/* === Time Badge === */
.time-badge {
  padding: 0.25rem 0.75rem;
  border-radius: 9999px;
  background: var(--blue-50);
  color: var(--blue-600);
  font-size: var(--text-xs);
}
"#;
