//! PowerShell helpers written into `tools/` of a project with a Brave profile.

/// Launches Brave on the project profile and opens the configured local URLs.
///
/// Ports come from `.brave-ports.conf` (defaulting to 8000 and 5173) and
/// extra URLs from `.brave-profile.conf`. `-Auto` opens everything, `-NoTabs`
/// opens nothing.
pub const LAUNCH_BRAVE_PS1: &str = r#"<#
.SYNOPSIS
  Launch Brave with project-defined ports and open related URLs.

.DESCRIPTION
  - Reads ports from .brave-ports.conf (one port per line).
  - If no file is found, defaults to ports 8000 and 5173.
  - Reads extra URLs from .brave-profile.conf (one URL per line).
  - Allows optional -Auto or -NoTabs flags.
#>

param(
  [string]$Name = "Brave (Project)",
  [string]$ProfileDir = ".brave-profile",
  [switch]$Auto,
  [switch]$NoTabs
)

# ---- Helpers ---------------------------------------------------------------

function Resolve-Brave {
  $paths = @(
    "$Env:LOCALAPPDATA\BraveSoftware\Brave-Browser\Application\brave.exe",
    "$Env:ProgramFiles\BraveSoftware\Brave-Browser\Application\brave.exe",
    "$Env:ProgramFiles(x86)\BraveSoftware\Brave-Browser\Application\brave.exe"
  )
  foreach ($p in $paths) { if (Test-Path $p) { return $p } }
  throw "Brave not found."
}

function Read-Ports {
  $conf = Join-Path (Get-Location) ".brave-ports.conf"
  $ports = @()
  if (Test-Path $conf) {
    Get-Content $conf | ForEach-Object {
      $t = $_.Trim()
      if ($t -match '^\d+$') { $ports += [int]$t }
    }
  }
  if ($ports.Count -eq 0) { $ports = @(8000,5173) }
  return $ports
}

function Read-ExtraUrls {
  $conf = Join-Path (Get-Location) ".brave-profile.conf"
  $urls = @()
  if (Test-Path $conf) {
    Get-Content $conf | ForEach-Object {
      $u = $_.Trim()
      if ($u -and -not $u.StartsWith('#')) { $urls += $u }
    }
  }
  return $urls
}

# ---- Main ------------------------------------------------------------------

$brave = Resolve-Brave
$profilePath = Join-Path (Get-Location) $ProfileDir
New-Item -ItemType Directory -Force -Path $profilePath | Out-Null

$ports = Read-Ports
$urlsPorts = $ports | ForEach-Object { "http://localhost:$($_)" }
$urlsConf  = Read-ExtraUrls

if ($NoTabs) {
  $urlsToOpen = @()
}
elseif ($Auto) {
  $urlsToOpen = ($urlsPorts + $urlsConf) | Select-Object -Unique
}
else {
  Write-Host "Available URLs:" -ForegroundColor Cyan
  $combined = ($urlsPorts + $urlsConf) | Select-Object -Unique
  for ($i=0; $i -lt $combined.Count; $i++) {
    Write-Host "[$i] $($combined[$i])"
  }
  $choice = Read-Host "Enter comma-separated indices or press Enter for all"
  if ([string]::IsNullOrWhiteSpace($choice)) {
    $urlsToOpen = $combined
  } else {
    $indices = $choice -split '[,\s]+' | ForEach-Object { [int]$_ }
    $urlsToOpen = foreach ($ix in $indices) {
      if ($ix -ge 0 -and $ix -lt $combined.Count) { $combined[$ix] }
    }
  }
}

$argList = @("--user-data-dir=$profilePath")
foreach ($u in $urlsToOpen) { $argList += @("--new-tab", $u) }

Start-Process -FilePath $brave -ArgumentList $argList
Write-Host "Brave launched with profile: $profilePath" -ForegroundColor Green
if ($urlsToOpen.Count -gt 0) {
  Write-Host ("Opened tabs:`n - " + ($urlsToOpen -join "`n - "))
} else {
  Write-Host "No tabs opened (profile only). Add ports in .brave-ports.conf." -ForegroundColor Yellow
}
"#;

/// Creates a desktop shortcut that starts Brave on the project profile.
pub const MAKE_SHORTCUT_PS1: &str = r#"param(
  [string]$Name = "Brave (Project)",
  [string]$ProfileDir = ".brave-profile"
)
$brave = "${env:ProgramFiles}\BraveSoftware\Brave-Browser\Application\brave.exe"
if (-not (Test-Path $brave)) {
  $brave = "${env:ProgramFiles(x86)}\BraveSoftware\Brave-Browser\Application\brave.exe"
}
if (-not (Test-Path $brave)) { Write-Error "Brave not found."; exit 1 }

$target = "`"$brave`" --user-data-dir=`"$PWD\$ProfileDir`""
$WScriptShell = New-Object -ComObject WScript.Shell
$Desktop = [Environment]::GetFolderPath("Desktop")
$Shortcut = $WScriptShell.CreateShortcut("$Desktop\$Name.lnk")
$Shortcut.TargetPath = $brave
$Shortcut.Arguments = "--user-data-dir=`"$PWD\$ProfileDir`""
$Shortcut.WorkingDirectory = "$PWD"
$Shortcut.Save()
Write-Host "Shortcut created on Desktop."
"#;

/// Deletes the project profile directory.
pub const CLEANUP_PS1: &str = r#"param([string]$ProfileDir = ".brave-profile")
$path = Join-Path (Get-Location) $ProfileDir
if (Test-Path $path) {
  Remove-Item -Recurse -Force $path
  Write-Host "Removed $path"
} else {
  Write-Host "Nothing to remove at $path"
}
"#;
