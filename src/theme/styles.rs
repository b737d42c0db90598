//! Global CSS styles for Profile Desk.
//!
//! Mobile-first cards on a soft grey background.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* SURFACES */
  --bg: #f1f5f9;
  --surface: #ffffff;
  --border: #e2e8f0;

  /* ACCENT */
  --teal: #0f766e;
  --teal-soft: #ccfbf1;

  /* TEXT */
  --text-primary: #1e293b;
  --text-secondary: #475569;
  --text-muted: #94a3b8;

  /* SEMANTIC */
  --danger: #e11d48;
  --danger-soft: #ffe4e6;
  --success: #16a34a;
  --info: #2563eb;

  /* Typography */
  --font-sans: 'Inter', 'Noto Sans', 'Noto Sans Devanagari', 'Noto Sans Tamil',
    'Noto Sans Telugu', 'Noto Sans Bengali', system-ui, sans-serif;

  --radius: 14px;
  --transition-fast: 150ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  background: var(--bg);
  color: var(--text-primary);
  font-family: var(--font-sans);
  font-size: 15px;
  line-height: 1.5;
}

.phone-frame {
  max-width: 480px;
  margin: 0 auto;
  min-height: 100vh;
  position: relative;
}

/* === Page === */
.profile-page, .sign-in-page {
  padding: 20px 16px 48px;
  display: flex;
  flex-direction: column;
  gap: 16px;
}

.page-header {
  display: flex;
  align-items: center;
  gap: 14px;
}

.avatar-initials {
  width: 56px;
  height: 56px;
  border-radius: 50%;
  background: var(--teal);
  color: #fff;
  font-size: 1.4rem;
  font-weight: 600;
  display: flex;
  align-items: center;
  justify-content: center;
}

.page-title { font-size: 1.5rem; font-weight: 700; }
.page-subtitle { color: var(--text-secondary); font-size: 0.875rem; }

/* === Cards === */
.card {
  background: var(--surface);
  border: 1px solid var(--border);
  border-radius: var(--radius);
  padding: 16px;
  display: flex;
  flex-direction: column;
  gap: 12px;
}

.card-header {
  display: flex;
  align-items: center;
  justify-content: space-between;
}

.card-title { font-size: 1rem; font-weight: 600; }

.setting-row {
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: 12px;
}

.setting-hint { color: var(--text-muted); font-size: 0.8rem; }

.detail-row {
  display: flex;
  justify-content: space-between;
  padding: 6px 0;
  border-bottom: 1px dashed var(--border);
}
.detail-row:last-child { border-bottom: none; }
.detail-label { color: var(--text-secondary); }
.detail-value { font-weight: 500; }

/* === Buttons === */
.btn-primary, .btn-secondary, .btn-danger, .btn-ghost {
  border-radius: 10px;
  padding: 10px 16px;
  font: inherit;
  font-weight: 600;
  cursor: pointer;
  transition: opacity var(--transition-fast);
}
.btn-primary { background: var(--teal); color: #fff; border: none; }
.btn-secondary { background: transparent; color: var(--text-primary); border: 1px solid var(--border); }
.btn-danger { background: var(--danger); color: #fff; border: none; }
.btn-ghost { background: none; border: none; color: var(--teal); padding: 4px 8px; }
button:disabled { opacity: 0.5; cursor: default; }

.icon-btn {
  background: none;
  border: none;
  font-size: 1.1rem;
  cursor: pointer;
  padding: 4px 6px;
  color: var(--text-secondary);
}
.icon-btn.danger { color: var(--danger); }

.button-row { display: flex; gap: 8px; justify-content: flex-end; }

/* === Inputs === */
.form-field { display: flex; flex-direction: column; gap: 4px; }
.input-label { font-size: 0.8rem; color: var(--text-secondary); }
.input-required { color: var(--danger); }
.input-field {
  border: 1px solid var(--border);
  border-radius: 10px;
  padding: 10px 12px;
  font: inherit;
  color: var(--text-primary);
}
.input-field:focus { outline: 2px solid var(--teal-soft); border-color: var(--teal); }

.inline-form { display: flex; gap: 8px; align-items: flex-end; }
.inline-form .form-field { flex: 1; }

/* === Toggle === */
.toggle {
  width: 48px;
  height: 28px;
  border-radius: 14px;
  border: none;
  background: var(--border);
  position: relative;
  cursor: pointer;
  transition: background var(--transition-fast);
}
.toggle-knob {
  position: absolute;
  top: 3px;
  left: 3px;
  width: 22px;
  height: 22px;
  border-radius: 50%;
  background: #fff;
  box-shadow: 0 1px 3px rgba(0, 0, 0, 0.2);
  transition: left var(--transition-fast);
}
.toggle.on { background: var(--teal); }
.toggle.on .toggle-knob { left: 23px; }
.toggle.pending { background: var(--text-muted); }

/* === Language chips === */
.language-grid { display: flex; flex-wrap: wrap; gap: 8px; }
.language-chip {
  border: 1px solid var(--border);
  background: var(--surface);
  border-radius: 999px;
  padding: 6px 14px;
  font: inherit;
  cursor: pointer;
}
.language-chip.selected { background: var(--teal-soft); border-color: var(--teal); color: var(--teal); }

/* === Addresses === */
.address-list { display: flex; flex-direction: column; gap: 10px; }
.address-card {
  border: 1px solid var(--border);
  border-radius: 12px;
  padding: 12px;
  display: flex;
  gap: 10px;
  align-items: flex-start;
}
.address-icon { font-size: 1.3rem; }
.address-body { flex: 1; }
.address-label { font-weight: 600; font-size: 0.9rem; }
.address-text { color: var(--text-secondary); font-size: 0.85rem; }
.address-actions { display: flex; }
.empty-state { color: var(--text-muted); text-align: center; padding: 12px; }

.label-picker { display: flex; gap: 8px; }
.label-option {
  flex: 1;
  border: 1px solid var(--border);
  background: var(--surface);
  border-radius: 10px;
  padding: 8px;
  font: inherit;
  cursor: pointer;
}
.label-option.selected { border-color: var(--teal); background: var(--teal-soft); }

/* === Modal === */
.modal-overlay {
  position: fixed;
  inset: 0;
  background: rgba(15, 23, 42, 0.45);
  display: flex;
  align-items: flex-end;
  justify-content: center;
  z-index: 50;
}
.modal-sheet {
  background: var(--surface);
  width: 100%;
  max-width: 480px;
  border-radius: var(--radius) var(--radius) 0 0;
  padding: 16px;
  display: flex;
  flex-direction: column;
  gap: 14px;
  max-height: 90vh;
  overflow-y: auto;
}
.modal-header { display: flex; justify-content: space-between; align-items: center; }
.modal-title { font-size: 1.1rem; }
.modal-body { display: flex; flex-direction: column; gap: 12px; }
.modal-actions { display: flex; gap: 8px; justify-content: flex-end; }

/* === Toasts === */
.toast-stack {
  position: fixed;
  left: 50%;
  bottom: 24px;
  transform: translateX(-50%);
  width: calc(100% - 32px);
  max-width: 448px;
  display: flex;
  flex-direction: column;
  gap: 8px;
  z-index: 100;
}
.toast {
  border-radius: 10px;
  padding: 10px 14px;
  color: #fff;
  box-shadow: 0 4px 12px rgba(0, 0, 0, 0.15);
  cursor: pointer;
  animation: toast-in 200ms ease;
}
.toast-success { background: var(--success); }
.toast-error { background: var(--danger); }
.toast-info { background: var(--info); }
@keyframes toast-in { from { opacity: 0; transform: translateY(8px); } }

/* === States === */
.error-state { padding: 48px 16px; text-align: center; color: var(--danger); }
.logout-btn { width: 100%; }
"#;
